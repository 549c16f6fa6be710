//! Main application for the Nim GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::pile_view::PileView;
use super::session::{GameOutcome, Session};
use super::theme::*;
use crate::config::MatchConfig;
use crate::eval::material;
use crate::{Player, WinMode};

/// Deepest look-ahead offered by the settings slider
const UI_MAX_DEPTH: u8 = 16;

/// Main Nim application
pub struct NimApp {
    session: Session,
    pile_view: PileView,
    /// Settings for the next "New Game"
    pending: MatchConfig,
    show_debug: bool,
}

impl NimApp {
    /// Create a new app starting a game with `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: MatchConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: MatchConfig) -> Self {
        Self {
            session: Session::new(config),
            pile_view: PileView::default(),
            pending: config,
            show_debug: true,
        }
    }

    fn start_new_game(&mut self) {
        if self.pending.initial.is_terminal() {
            self.session.message = Some("Put at least one marble on the table".to_string());
            return;
        }
        self.session = Session::new(self.pending);
    }

    fn start_with_mode(&mut self, mode: WinMode) {
        self.pending.mode = mode;
        self.start_new_game();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Standard)").clicked() {
                        self.start_with_mode(WinMode::Standard);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Misère)").clicked() {
                        self.start_with_mode(WinMode::Misere);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.session.config;
                    ui.label(format!("{} rules - depth {}", config.mode, config.depth));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.outcome {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_MARBLE));
            ui.label(RichText::new("●").size(20.0).color(BLUE_MARBLE));
            ui.add_space(4.0);
            ui.label(RichText::new("RED-BLUE NIM").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (who, status) = if self.session.outcome.is_some() {
                ("-", ("Game Over", WIN_HIGHLIGHT))
            } else if self.session.is_ai_thinking() {
                ("COMPUTER", ("AI thinking...", TIMER_WARNING))
            } else if self.session.is_human_turn() {
                ("YOU", ("Your turn", TIMER_NORMAL))
            } else {
                ("COMPUTER", ("Waiting", TEXT_SECONDARY))
            };

            ui.label(RichText::new(who).size(18.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new(status.0).size(12.0).color(status.1));
            ui.add_space(6.0);

            let state = self.session.state;
            ui.label(
                RichText::new(format!(
                    "Red {}  ·  Blue {}  ·  Material {}",
                    state.red,
                    state.blue,
                    material(&state)
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );

            if let Some((player, mv)) = self.session.last_move {
                let who = match player {
                    Player::Human => "You",
                    Player::Computer => "Computer",
                };
                ui.label(
                    RichText::new(format!("{who} took {} {}", mv.count, mv.pile))
                        .size(11.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Settings applied by the next new game
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("NEXT GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Red");
                ui.add(egui::DragValue::new(&mut self.pending.initial.red).range(0..=999));
                ui.label("Blue");
                ui.add(egui::DragValue::new(&mut self.pending.initial.blue).range(0..=999));
            });
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.pending.mode, WinMode::Standard, "Standard");
                ui.radio_value(&mut self.pending.mode, WinMode::Misere, "Misère");
            });
            ui.horizontal(|ui| {
                ui.label("First:");
                ui.radio_value(&mut self.pending.first_player, Player::Computer, "Computer");
                ui.radio_value(&mut self.pending.first_player, Player::Human, "You");
            });
            ui.add(egui::Slider::new(&mut self.pending.depth, 1..=UI_MAX_DEPTH).text("depth"));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.start_new_game();
                }
                if ui.button("Hint (H)").clicked() {
                    self.session.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Depth {}", result.depth)).size(11.0).strong().color(TIMER_NORMAL));
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            if let Some(mv) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ take {} {}", mv.count, mv.pile)).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let headline = match outcome.winner {
            Player::Human => "YOU WIN!",
            Player::Computer => "COMPUTER WINS",
        };
        let reason = match (outcome.last_mover, self.session.config.mode) {
            (Player::Human, WinMode::Standard) => "you took the last marble",
            (Player::Computer, WinMode::Standard) => "the computer took the last marble",
            (Player::Human, WinMode::Misere) => "you took the last marble (misère)",
            (Player::Computer, WinMode::Misere) => "the computer took the last marble (misère)",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(reason).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.start_new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the marble table
    fn render_table(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);

            let accepts_input = self.session.outcome.is_none()
                && self.session.is_human_turn()
                && !self.session.is_ai_thinking();
            let last_taken = self.session.last_move.map(|(_, mv)| mv);

            let clicked = self.pile_view.show(
                ui,
                &self.session.state,
                last_taken,
                self.session.suggested_move,
                accepts_input,
            );

            if let Some(mv) = clicked {
                if let Err(err) = self.session.try_take(mv) {
                    self.session.message = Some(err.to_string());
                }
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new("Point at a marble to take it and everything to its right (1 or 2).")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, hint, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.session.request_suggestion();
        }
        if new_game {
            self.start_new_game();
        }
    }
}

impl eframe::App for NimApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && self.session.outcome.is_none() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_table(ctx);

        if self.session.is_ai_thinking() || self.session.outcome.is_none() {
            ctx.request_repaint();
        }
    }
}
