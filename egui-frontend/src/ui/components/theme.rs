//! # Theme
//!
//! Dark and light appearance for the whole window, plus the accent colors
//! used by the header and buttons.

use eframe::egui::{self, Color32};
use shared::BarColor;

/// Accent used for the title and the primary button
pub const ACCENT: Color32 = Color32::from_rgb(0x4D, 0x96, 0xFF);

/// Color of the running total label
pub const TOTAL_COLOR: Color32 = Color32::from_rgb(0x28, 0xA7, 0x45);

/// Apply the dark or light visuals to the context
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

pub fn to_color32(color: BarColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
