//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors - dark slate with light grid
pub const BOARD_BG: Color32 = Color32::from_rgb(36, 39, 46);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 95, 105);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(96, 165, 250);
pub const O_COLOR: Color32 = Color32::from_rgb(251, 191, 36);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Hover preview alpha variants
pub fn hover_x() -> Color32 {
    Color32::from_rgba_unmultiplied(96, 165, 250, 90)
}

pub fn hover_o() -> Color32 {
    Color32::from_rgba_unmultiplied(251, 191, 36, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_RADIUS_RATIO: f32 = 0.30;
pub const MARK_STROKE_RATIO: f32 = 0.08;
