use eframe::Frame;
use egui::{Color32, Context, RichText, Ui};

use shangyou_shared::{Card, Game, GameStatePublic, PlayerIntent};

use super::{AppInterface, ScreenWidget};
use crate::game::theme::{CARD_CHIP_MIN_SIZE, CARD_FONT_SIZE, MARGIN_MD, MARGIN_SM};
use crate::game::AppEvent;

/// Main game screen: renders the table and feeds user intents back into the
/// engine.
pub struct TableScreen {
    game: Option<Game>,
    /// View-local card selection; not part of the engine state.
    selected: Vec<Card>,
}

impl TableScreen {
    pub fn new() -> Self {
        Self {
            game: None,
            selected: Vec::new(),
        }
    }

    /// Deal a fresh round for the given player count.
    pub fn start(&mut self, num_players: usize) {
        self.game = Some(Game::new(num_players));
        self.selected.clear();
    }

    /// Tear the round down to the pre-deal state.
    pub fn reset(&mut self) {
        self.game = None;
        self.selected.clear();
    }

    /// Apply an engine intent. The selection is dropped whenever the turn
    /// moves on, matching the hands being hidden again.
    pub fn dispatch(&mut self, intent: PlayerIntent) {
        if let Some(game) = &mut self.game {
            let turn_before = game.current_player;
            game.apply_intent(intent);
            if game.current_player != turn_before {
                self.selected.clear();
            }
        }
    }

    fn toggle_selected(&mut self, card: Card) {
        if let Some(pos) = self.selected.iter().position(|c| *c == card) {
            self.selected.remove(pos);
        } else {
            self.selected.push(card);
        }
    }

    fn render_player_row(
        &mut self,
        ui: &mut Ui,
        app_interface: &mut AppInterface,
        state: &GameStatePublic,
        seat: usize,
    ) {
        let player = &state.players[seat];
        let is_turn = state.current_player == seat;

        ui.group(|ui| {
            ui.horizontal(|ui| {
                if is_turn {
                    ui.colored_label(Color32::from_rgb(255, 215, 0), "●");
                } else {
                    ui.label("  ");
                }
                ui.label(RichText::new(&player.name).strong());
                ui.monospace(format!("{} cards", player.hand_len));
            });

            match &player.cards {
                Some(hand) => {
                    ui.horizontal_wrapped(|ui| {
                        for &card in hand {
                            let is_selected = self.selected.contains(&card);
                            if card_chip(ui, card, is_selected).clicked() {
                                self.toggle_selected(card);
                            }
                        }
                    });
                }
                None => {
                    ui.horizontal_wrapped(|ui| {
                        for _ in 0..player.hand_len {
                            card_back(ui);
                        }
                    });
                }
            }

            if is_turn {
                ui.add_space(MARGIN_SM);
                ui.horizontal(|ui| {
                    if player.cards.is_none() {
                        if ui.button("Show My Cards").clicked() {
                            app_interface.queue_event(AppEvent::Intent(PlayerIntent::Reveal {
                                player: player.id,
                            }));
                        }
                    } else {
                        let play = egui::Button::new("Play");
                        if ui.add_enabled(!self.selected.is_empty(), play).clicked() {
                            // Submit in ascending hand order so the lead
                            // card of the combination is first.
                            let hand = player.cards.as_deref().unwrap_or(&[]);
                            let cards: Vec<Card> = hand
                                .iter()
                                .copied()
                                .filter(|c| self.selected.contains(c))
                                .collect();
                            app_interface.queue_event(AppEvent::Intent(PlayerIntent::Play {
                                player: player.id,
                                cards,
                            }));
                            // Selection is dropped after every attempt,
                            // valid or not.
                            self.selected.clear();
                        }
                        if ui.button("Pass").clicked() {
                            app_interface.queue_event(AppEvent::Intent(PlayerIntent::Pass {
                                player: player.id,
                            }));
                            self.selected.clear();
                        }
                    }
                });
            }
        });
    }
}

impl Default for TableScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenWidget for TableScreen {
    fn update(&mut self, app_interface: &mut AppInterface, ctx: &Context, _frame: &mut Frame) {
        // Render from a snapshot; intents queue up and apply next frame.
        let state = match self.game.as_ref() {
            Some(game) => game.public(),
            None => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.label("No game running");
                    if ui.button("Back to setup").clicked() {
                        app_interface
                            .queue_event(AppEvent::ChangeScreen(super::ScreenType::Setup));
                    }
                });
                return;
            }
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Zheng Shangyou (Up to 4 Players)");
            ui.add_space(MARGIN_MD);

            for seat in 0..state.players.len() {
                self.render_player_row(ui, app_interface, &state, seat);
                ui.add_space(MARGIN_SM);
            }

            ui.separator();
            ui.group(|ui| {
                ui.label(RichText::new("Play Area").strong());
                ui.horizontal_wrapped(|ui| {
                    if state.play_area.is_empty() {
                        ui.label("—");
                    }
                    for &card in &state.play_area {
                        let (text, color) = card_text_and_color(card);
                        ui.label(RichText::new(text).color(color).size(CARD_FONT_SIZE));
                    }
                });
            });

            if !state.message.is_empty() {
                ui.add_space(MARGIN_SM);
                ui.colored_label(Color32::LIGHT_BLUE, &state.message);
            }

            ui.add_space(MARGIN_MD);
            ui.horizontal(|ui| {
                if ui.button("Reset Game").clicked() {
                    app_interface.queue_event(AppEvent::Intent(PlayerIntent::Reset));
                }
                if ui
                    .button("Copy state")
                    .on_hover_text("Copy the public table state as JSON")
                    .clicked()
                {
                    if let Ok(dump) = serde_json::to_string_pretty(&state) {
                        ui.ctx().copy_text(dump);
                    }
                }
            });
        });
    }
}

fn card_text_and_color(c: Card) -> (String, Color32) {
    let color = if c.is_red() {
        Color32::from_rgb(220, 50, 50)
    } else {
        Color32::WHITE
    };
    (c.label(), color)
}

fn card_chip(ui: &mut Ui, c: Card, selected: bool) -> egui::Response {
    let (text, color) = card_text_and_color(c);
    ui.add_sized(
        CARD_CHIP_MIN_SIZE,
        egui::SelectableLabel::new(
            selected,
            RichText::new(text).color(color).size(CARD_FONT_SIZE),
        ),
    )
}

fn card_back(ui: &mut Ui) {
    ui.add_sized(
        CARD_CHIP_MIN_SIZE,
        egui::Button::new(RichText::new("🂠").size(CARD_FONT_SIZE)),
    );
}
