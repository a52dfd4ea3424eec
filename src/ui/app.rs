//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel};
use rand::rngs::ThreadRng;

use crate::board::Mark;
use crate::policy::Difficulty;
use crate::session::{GameEvent, GameSession, RoundOutcome, RoundPhase};

use super::board_view::BoardView;
use super::theme::*;

/// Main Tic-Tac-Toe application.
///
/// Thin adapter over [`GameSession`]: forwards clicks and control changes
/// in, drains events out, and renders the board plus the side panel.
pub struct TicTacToeApp {
    session: GameSession<ThreadRng>,
    board_view: BoardView,
    /// Player mark selector state, applied on the next round
    play_as: Mark,
    status: String,
    banner: Option<String>,
    /// Round log, newest first
    log: Vec<String>,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            board_view: BoardView::default(),
            play_as: Mark::X,
            status: String::new(),
            banner: None,
            log: Vec::new(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Apply the session's buffered events to the view state
    fn consume_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::StatusChanged(text) => self.status = text,
                GameEvent::LogAppended(message) => self.log.insert(0, message),
                GameEvent::RoundEnded { outcome, .. } => {
                    self.banner = Some(match outcome {
                        RoundOutcome::PlayerWin => "You Win!".to_string(),
                        RoundOutcome::ComputerWin => "Computer Wins".to_string(),
                        RoundOutcome::Draw => "It's a Draw".to_string(),
                    });
                }
                // Cells and scores are read straight from the session.
                GameEvent::CellFilled { .. } | GameEvent::ScoreChanged(_) => {}
            }
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with status, controls, scores and the log
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_controls_card(ui);
                ui.add_space(10.0);
                self.render_score_card(ui);

                if self.banner.is_some() {
                    ui.add_space(10.0);
                    self.render_round_over_card(ui);
                }

                ui.add_space(10.0);
                self.render_log_card(ui);
            });
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("✕○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("versus a minimax opponent")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = if self.session.is_thinking() {
                STATUS_THINKING
            } else {
                STATUS_READY
            };
            ui.label(RichText::new(&self.status).size(13.0).color(color));
        });
    }

    fn render_controls_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CONTROLS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            // Difficulty, effective from the next computer move
            let mut difficulty = self.session.difficulty();
            egui::ComboBox::from_label("Difficulty")
                .selected_text(difficulty.label())
                .show_ui(ui, |ui| {
                    for level in Difficulty::ALL {
                        ui.selectable_value(&mut difficulty, level, level.label());
                    }
                });
            if difficulty != self.session.difficulty() {
                self.session.set_difficulty(difficulty);
            }

            ui.add_space(6.0);

            // Mark selection, effective from the next round
            ui.horizontal(|ui| {
                ui.label(RichText::new("Play as").size(12.0).color(TEXT_SECONDARY));
                ui.radio_value(&mut self.play_as, Mark::X, "X");
                ui.radio_value(&mut self.play_as, Mark::O, "O");
            });
            self.session.set_player_mark(self.play_as);

            ui.add_space(8.0);
            if ui.button(RichText::new("New Round").size(13.0)).clicked() {
                self.start_new_round();
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let tally = self.session.tally();
            let rows = [
                ("You", tally.player_wins, X_COLOR),
                ("Computer", tally.computer_wins, O_COLOR),
                ("Draws", tally.draws, TEXT_SECONDARY),
            ];
            for (label, value, color) in rows {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(value.to_string()).size(16.0).strong().color(color));
                    });
                });
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Round {}", self.session.round()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_round_over_card(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.banner.clone() else {
            return;
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("ROUND OVER").size(11.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(RichText::new(banner).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    if ui.button(RichText::new("Play Again").size(13.0)).clicked() {
                        self.start_new_round();
                    }
                });
            });
    }

    fn render_log_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ROUND LOG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                if self.log.is_empty() {
                    ui.label(RichText::new("No rounds finished yet.").size(11.0).color(TEXT_MUTED));
                }
                for entry in &self.log {
                    ui.label(RichText::new(entry).size(11.0).color(TEXT_SECONDARY));
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                let winning_line = self
                    .session
                    .round_result()
                    .and_then(|result| result.winning_line);
                let interactive = self.session.phase() == RoundPhase::AwaitingPlayerMove;

                let clicked = self.board_view.show(
                    ui,
                    self.session.board(),
                    self.session.player_mark(),
                    winning_line,
                    interactive,
                );

                if let Some(index) = clicked {
                    self.session.submit_player_move(index);
                }
            });
    }

    fn start_new_round(&mut self) {
        self.banner = None;
        self.session.start_new_round();
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Let a pending computer move fire, then pick up what changed.
        self.session.poll();
        self.consume_events();

        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep ticking while the computer's deferred move is pending.
        if self.session.is_thinking() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
