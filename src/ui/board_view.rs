//! Board rendering for the GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area, without the margin
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let rows = f32::from(board.rows());
        let cols = f32::from(board.cols());

        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows)
            .max(8.0);
        let size = Vec2::new(cols * self.cell_size, rows * self.cell_size);

        let (response, painter) =
            ui.allocate_painter(size + Vec2::splat(2.0 * BOARD_MARGIN), Sense::click());
        self.grid_rect = Rect::from_min_size(response.rect.min + Vec2::splat(BOARD_MARGIN), size);

        painter.rect_filled(response.rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter, board);

        for pos in board.positions() {
            if let Some(mark) = board.cell(pos) {
                self.draw_mark(&painter, pos, mark, false);
            }
        }

        if let Some(pos) = last_move {
            let corner = self.cell_rect(pos).right_top() + Vec2::new(-8.0, 8.0);
            painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked = None;
        if accepts_input {
            if let Some(pos) = response.hover_pos().and_then(|p| self.screen_to_board(p, board)) {
                if board.is_legal(pos) {
                    self.draw_mark(&painter, pos, current_turn, true);
                    if response.clicked() {
                        clicked = Some(pos);
                    }
                } else {
                    painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::ZERO, hover_invalid());
                }
            }
        }

        clicked
    }

    fn draw_grid(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;
        painter.rect_stroke(rect, CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);

        for c in 1..board.cols() {
            let x = rect.min.x + f32::from(c) * self.cell_size;
            painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
        }
        for r in 1..board.rows() {
            let y = rect.min.y + f32::from(r) * self.cell_size;
            painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        }

        let font = egui::FontId::proportional(12.0);
        for c in 1..=board.cols() {
            let center = self.cell_rect(Pos::new(1, c)).center_top() - Vec2::new(0.0, BOARD_MARGIN * 0.5);
            painter.text(center, egui::Align2::CENTER_CENTER, c, font.clone(), GRID_LINE);
        }
        for r in 1..=board.rows() {
            let center = self.cell_rect(Pos::new(r, 1)).left_center() - Vec2::new(BOARD_MARGIN * 0.5, 0.0);
            painter.text(center, egui::Align2::CENTER_CENTER, r, font.clone(), GRID_LINE);
        }
    }

    /// Draw X as a cross and O as a ring, translucent for a hover preview
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, ghost: bool) {
        let Some(color) = mark_color(mark) else {
            return;
        };
        let color = if ghost { preview(color) } else { color };
        let center = self.cell_rect(pos).center();
        let half = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(MARK_STROKE.min(self.cell_size * 0.1), color);

        match mark {
            Mark::X => {
                painter.line_segment([center - Vec2::splat(half), center + Vec2::splat(half)], stroke);
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
            Mark::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for &pos in line {
            painter.rect_stroke(self.cell_rect(pos).shrink(3.0), CornerRadius::same(4), stroke, egui::StrokeKind::Inside);
        }
        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            painter.line_segment(
                [self.cell_rect(first).center(), self.cell_rect(last).center()],
                stroke,
            );
        }
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(
                f32::from(pos.col.saturating_sub(1)) * self.cell_size,
                f32::from(pos.row.saturating_sub(1)) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2, board: &Board) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i64 + 1;
        let row = (relative.y / self.cell_size).floor() as i64 + 1;

        let row = u8::try_from(row).ok().filter(|&r| r <= board.rows())?;
        let col = u8::try_from(col).ok().filter(|&c| c <= board.cols())?;
        Some(Pos::new(row, col))
    }
}
