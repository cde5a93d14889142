use eframe::Frame;
use egui::Context;

pub mod setup_screen;
pub mod table_screen;

pub use setup_screen::SetupScreen;
pub use table_screen::TableScreen;

/// Interface for screens to interact with the app
pub struct AppInterface<'a> {
    pub events: &'a mut Vec<crate::game::AppEvent>,
}

impl<'a> AppInterface<'a> {
    pub fn queue_event(&mut self, event: crate::game::AppEvent) {
        self.events.push(event);
    }
}

/// Common trait for all screen widgets
pub trait ScreenWidget {
    fn update(&mut self, app_interface: &mut AppInterface, ctx: &Context, frame: &mut Frame);
}

/// Enum representing all available screen types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenType {
    Setup,
    Table,
}

impl ScreenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenType::Setup => "setup",
            ScreenType::Table => "table",
        }
    }
}
