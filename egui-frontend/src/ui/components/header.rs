//! # Header Module
//!
//! Title bar with the running total on the right.

use eframe::egui;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::theme::{ACCENT, TOTAL_COLOR};

impl ExpenseTrackerApp {
    /// Render the title and the total label
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💰 Expense Tracker")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .color(ACCENT)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.total_text())
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(TOTAL_COLOR)
                        .strong(),
                );
            });
        });
    }

    /// Render the row of buttons below the list
    pub fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("📊 View Summary").clicked() {
                self.show_summary();
            }
            if ui.button("🗑 Delete Expense").clicked() {
                self.delete_selected();
            }
            if ui.button("📄 Export PDF").clicked() {
                self.export_report();
            }
            if ui.button("🌓 Toggle Theme").clicked() {
                self.toggle_theme();
            }
        });
        ui.add_space(4.0);
    }
}
