pub const MARGIN_SM: f32 = 8.0;
pub const MARGIN_MD: f32 = 12.0;
pub const MARGIN_LG: f32 = 16.0;

pub const CARD_CHIP_MIN_SIZE: egui::Vec2 = egui::Vec2::new(48.0, 40.0);
pub const CARD_FONT_SIZE: f32 = 22.0;

pub const MENU_BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(200.0, 40.0);
