//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, CELL_COUNT};

use super::theme::*;

const GRID_SIZE: usize = 3;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// Hover previews and clicks are only offered on empty cells while
    /// `interactive` is true (the player's turn).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        player_mark: Mark,
        winning_line: Option<[usize; 3]>,
        interactive: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / GRID_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_cell = None;
        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(index) = self.screen_to_cell(pointer_pos) {
                    if board.is_cell_empty(index) {
                        self.draw_hover_preview(&painter, index, player_mark);
                        if response.clicked() {
                            clicked_cell = Some(index);
                        }
                    }
                }
            }
        }

        clicked_cell
    }

    /// Draw the two vertical and two horizontal divider lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = GRID_SIZE as f32 * self.cell_size;

        for i in 1..GRID_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for index in 0..CELL_COUNT {
            if let Some(mark) = board.get(index) {
                self.draw_mark(painter, index, mark, 1.0);
            }
        }
    }

    /// Draw a single mark; `alpha` < 1.0 renders a hover ghost
    fn draw_mark(&self, painter: &Painter, index: usize, mark: Mark, alpha: f32) {
        let center = self.cell_center(index);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let width = self.cell_size * MARK_STROKE_RATIO;

        match mark {
            Mark::X => {
                let color = if alpha < 1.0 { hover_x() } else { X_COLOR };
                let stroke = Stroke::new(width, color);
                let d = Vec2::new(radius, radius);
                painter.line_segment([center - d, center + d], stroke);
                let d = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
            }
            Mark::O => {
                let color = if alpha < 1.0 { hover_o() } else { O_COLOR };
                painter.circle_stroke(center, radius, Stroke::new(width, color));
            }
        }
    }

    /// Draw the winning line highlight through the three cells
    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let stroke = Stroke::new(5.0, WIN_HIGHLIGHT);
        let start = self.cell_center(line[0]);
        let end = self.cell_center(line[2]);
        painter.line_segment([start, end], stroke);

        for index in line {
            let center = self.cell_center(index);
            let radius = self.cell_size * MARK_RADIUS_RATIO + 8.0;
            painter.circle_stroke(center, radius, Stroke::new(3.0, WIN_HIGHLIGHT));
        }
    }

    /// Draw a translucent preview of the player's mark
    fn draw_hover_preview(&self, painter: &Painter, index: usize, mark: Mark) {
        self.draw_mark(painter, index, mark, 0.4);
    }

    /// Convert screen coordinates to a cell index
    fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if (0..GRID_SIZE as i32).contains(&col) && (0..GRID_SIZE as i32).contains(&row) {
            Some(row as usize * GRID_SIZE + col as usize)
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    fn cell_center(&self, index: usize) -> Pos2 {
        let row = index / GRID_SIZE;
        let col = index % GRID_SIZE;
        let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
