//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 229, 214);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 64, 56);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 60, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 100, 190);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 180, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

/// Translucent version of a mark color for previews
pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE: f32 = 6.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

pub fn mark_color(mark: crate::board::Mark) -> Option<Color32> {
    match mark {
        crate::board::Mark::X => Some(X_MARK),
        crate::board::Mark::O => Some(O_MARK),
        crate::board::Mark::Empty => None,
    }
}
