use eframe::egui;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::{apply_theme, render_summary_chart};

impl eframe::App for ExpenseTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx, self.ui.dark_mode);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            self.render_action_buttons(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_expense_form(ui);
            ui.separator();
            self.render_expense_table(ui);
        });

        self.render_summary_window(ctx);
        self.render_message_window(ctx);
    }
}

impl ExpenseTrackerApp {
    /// Show the summary chart in its own window while one is loaded
    fn render_summary_window(&mut self, ctx: &egui::Context) {
        let Some(summary) = &self.chart.summary else {
            return;
        };

        let mut open = true;
        egui::Window::new(summary.title.as_str())
            .id(egui::Id::new("summary_chart_window"))
            .open(&mut open)
            .default_size([500.0, 400.0])
            .show(ctx, |ui| {
                render_summary_chart(ui, summary);
            });

        if !open {
            self.chart.close();
        }
    }

    /// Show the pending message until the user dismisses it
    fn render_message_window(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.ui.message else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(message.title.as_str())
            .id(egui::Id::new("message_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let icon = if message.is_error { "❌" } else { "✅" };
                ui.label(format!("{} {}", icon, message.text));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.ui.clear_messages();
        }
    }
}
