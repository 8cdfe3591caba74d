//! Main application for the GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Board;
use crate::engine::AIEngine;
use crate::game::{GameMode, GameOutcome};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    /// Create the app; the first game is Human (X) vs Computer (O)
    pub fn new(_cc: &eframe::CreationContext<'_>, board: Board, engine: AIEngine) -> Self {
        Self {
            state: GameState::new(GameMode::HumanVsAgent, board, engine),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.state.board.clone(), self.state.engine().clone());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for mode in GameMode::ALL {
                        if ui.button(format!("New Game ({})", mode.label())).clicked() {
                            self.new_game(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Agent Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let board = &self.state.board;
                    ui.label(format!(
                        "{} | {}x{}, {} in a row",
                        self.state.mode.label(),
                        board.rows(),
                        board.cols(),
                        board.win_length()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if self.show_debug {
                    self.render_agent_card(ui);
                    ui.add_space(10.0);
                }

                if let Some(outcome) = self.state.outcome {
                    self.render_game_over_card(ui, outcome);
                    ui.add_space(10.0);
                }

                if let Some(msg) = &self.state.message {
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new(msg).size(11.0).color(TIMER_WARNING));
                    });
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let color = mark_color(turn).unwrap_or(TEXT_PRIMARY);

            ui.horizontal(|ui| {
                ui.label(RichText::new(turn.to_string()).size(36.0).strong().color(color));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Player {turn}")).size(16.0).strong().color(TEXT_PRIMARY));

                    let (status, status_color) = if self.state.outcome.is_some() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("Thinking... {:.1}s", elapsed.as_secs_f32()), TIMER_WARNING)
                    } else if self.state.is_human_turn() {
                        (format!("Your turn {:.1}s", self.state.move_timer.elapsed().as_secs_f32()), TIMER_NORMAL)
                    } else {
                        ("Waiting for agent".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(status_color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last search result: move, score, nodes, time
    fn render_agent_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new(format!("AGENT (look-ahead {})", self.state.engine().look_ahead()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            if let Some(pos) = result.best_move {
                ui.label(
                    RichText::new(format!("Moved to [column|row]: [{}|{}]", pos.col, pos.row))
                        .size(12.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            }
            let score_color = match result.score {
                s if s > 0 => TIMER_NORMAL,
                s if s < 0 => TIMER_CRITICAL,
                _ => TEXT_SECONDARY,
            };
            ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).color(score_color));
            ui.label(
                RichText::new(format!(
                    "{} nodes, {} cutoffs, {}ms",
                    result.nodes, result.cutoffs, result.time_ms
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (headline, color) = match outcome {
            GameOutcome::Draw => ("DRAW".to_string(), TEXT_PRIMARY),
            GameOutcome::Win(mark) => (
                format!("{mark} WINS!"),
                mark_color(mark).unwrap_or(WIN_HIGHLIGHT),
            ),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(22.0).strong().color(color));
                    ui.add_space(10.0);
                    if ui.button("Play again").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepts_input = self.state.outcome.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                self.state.winning_line.as_deref(),
                accepts_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.outcome.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.outcome.is_none() {
            // keeps the move timer ticking
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
