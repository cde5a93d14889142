use eframe::Frame;
use egui::Context;

use super::{AppInterface, ScreenWidget};
use crate::game::theme::{MARGIN_LG, MARGIN_MD, MENU_BUTTON_SIZE};
use crate::game::AppEvent;
use crate::sprintln;

/// Entry screen asking how many players sit at the table.
pub struct SetupScreen {}

impl SetupScreen {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenWidget for SetupScreen {
    fn update(&mut self, app_interface: &mut AppInterface, ctx: &Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Zheng Shangyou");
                ui.add_space(MARGIN_LG);
                ui.label("How many players? (2-4)");
                ui.add_space(MARGIN_MD);

                for n in 2..=4usize {
                    if ui
                        .add_sized(MENU_BUTTON_SIZE, egui::Button::new(format!("{} Players", n)))
                        .clicked()
                    {
                        sprintln!("starting a {} player game", n);
                        app_interface.queue_event(AppEvent::StartGame(n));
                    }
                    ui.add_space(MARGIN_MD);
                }
            });
        });
    }
}
