use egui::Context;

pub mod screens;
pub mod theme;

use screens::{AppInterface, ScreenType, ScreenWidget};
use shangyou_shared::PlayerIntent;

/// Events that can be sent between screens
#[derive(Debug, Clone)]
pub enum AppEvent {
    ChangeScreen(ScreenType),
    StartGame(usize),
    Intent(PlayerIntent),
}

/// Application state that owns all screen data
pub struct App {
    current_screen: ScreenType,
    setup: screens::SetupScreen,
    table: screens::TableScreen,

    // Event queue for screen transitions and engine intents
    pending_events: Vec<AppEvent>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            current_screen: ScreenType::Setup,
            setup: screens::SetupScreen::new(),
            table: screens::TableScreen::new(),
            pending_events: Vec::new(),
        }
    }

    /// Get the current screen type
    pub fn current_screen(&self) -> ScreenType {
        self.current_screen
    }

    // Events are processed one at a time in arrival order, so no screen can
    // dispatch against a stale state snapshot.
    fn process_events(&mut self) {
        for event in std::mem::take(&mut self.pending_events) {
            match event {
                AppEvent::ChangeScreen(screen) => {
                    self.current_screen = screen;
                }
                AppEvent::StartGame(num_players) => {
                    tracing::info!(num_players, "dealing a new round");
                    self.table.start(num_players);
                    self.current_screen = ScreenType::Table;
                }
                AppEvent::Intent(PlayerIntent::Reset) => {
                    tracing::info!("round reset, back to setup");
                    self.table.reset();
                    self.current_screen = ScreenType::Setup;
                }
                AppEvent::Intent(intent) => {
                    tracing::debug!(?intent, "player intent");
                    self.table.dispatch(intent);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        // Set pixels_per_point based on screen resolution
        let pixels_per_point = crate::calculate_dpi_scale();
        ctx.set_pixels_per_point(pixels_per_point);

        // Process any pending events first
        self.process_events();

        // Prepare event queue for screens
        let mut events = Vec::new();
        let mut app_interface = AppInterface {
            events: &mut events,
        };

        match self.current_screen {
            ScreenType::Setup => self.setup.update(&mut app_interface, ctx, frame),
            ScreenType::Table => self.table.update(&mut app_interface, ctx, frame),
        }

        self.pending_events.extend(events);
    }
}
