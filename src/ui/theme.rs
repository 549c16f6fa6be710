//! Theme constants for the Nim GUI

use egui::Color32;

// Table
pub const TABLE_BG: Color32 = Color32::from_rgb(38, 70, 52);
pub const TABLE_SLOT: Color32 = Color32::from_rgb(30, 56, 42);

// Marbles
pub const RED_MARBLE: Color32 = Color32::from_rgb(210, 55, 55);
pub const RED_MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(245, 130, 120);
pub const BLUE_MARBLE: Color32 = Color32::from_rgb(50, 100, 215);
pub const BLUE_MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(125, 170, 250);
pub const TAKEN_OUTLINE: Color32 = Color32::from_rgb(150, 160, 150);

// Markers
pub const SUGGESTION_RING: Color32 = Color32::from_rgb(255, 215, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_take() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 90)
}

// Panel colors - dark modern theme
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
pub const TABLE_MARGIN: f32 = 32.0;
pub const ROW_HEIGHT: f32 = 90.0;
pub const LABEL_WIDTH: f32 = 70.0;
pub const MAX_MARBLE_RADIUS: f32 = 18.0;
pub const MARBLE_SPACING: f32 = 2.4;
/// Beyond this only the top of a pile is drawn
pub const MAX_DRAWN_MARBLES: u32 = 40;
