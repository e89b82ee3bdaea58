use eframe::egui;
use shared::Category;

use crate::ui::app_state::ExpenseTrackerApp;
use crate::ui::components::theme::ACCENT;

impl ExpenseTrackerApp {
    /// Render the add-expense form
    pub fn render_expense_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("expense_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Expense Name:");
                ui.add(egui::TextEdit::singleline(&mut self.form.name).desired_width(250.0));
                ui.end_row();

                ui.label(format!("Amount ({}):", self.backend.form_service.currency_symbol()));
                ui.add(egui::TextEdit::singleline(&mut self.form.amount_text).desired_width(250.0));
                ui.end_row();

                ui.label("Category:");
                egui::ComboBox::from_id_source("category_select")
                    .selected_text(self.form.category.label())
                    .width(250.0)
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            ui.selectable_value(&mut self.form.category, category, category.label());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);
        let add_button = egui::Button::new(egui::RichText::new("➕ Add Expense").color(egui::Color32::WHITE))
            .fill(ACCENT);
        if ui.add(add_button).clicked() {
            self.add_expense();
        }
    }
}
