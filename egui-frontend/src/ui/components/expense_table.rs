//! # Expense Table
//!
//! The list of stored expenses with single-row selection. Clicking any cell
//! selects its row; double-clicking fires the edit hook.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ui::app_state::ExpenseTrackerApp;

const ROW_HEIGHT: f32 = 22.0;

impl ExpenseTrackerApp {
    /// Render the expense list
    pub fn render_expense_table(&mut self, ui: &mut egui::Ui) {
        if self.list.rows.is_empty() {
            ui.label("No expenses yet!");
            return;
        }

        let mut clicked_row = None;
        let mut activated_row = None;
        let selected = self.list.selected;
        let form_service = &self.backend.form_service;
        let rows = &self.list.rows;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(180.0).at_least(80.0))
            .column(Column::initial(90.0).at_least(60.0))
            .column(Column::initial(130.0).at_least(80.0))
            .column(Column::remainder().at_least(80.0))
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Name", "Amount", "Category", "Date"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let index = row.index();
                    let expense = &rows[index];
                    let is_selected = selected == Some(index);
                    let cells = [
                        expense.name.clone(),
                        form_service.format_amount(expense.amount),
                        expense.category.clone(),
                        expense.date.clone(),
                    ];

                    for text in cells {
                        row.col(|ui| {
                            let response = ui.selectable_label(is_selected, text);
                            if response.clicked() {
                                clicked_row = Some(index);
                            }
                            if response.double_clicked() {
                                activated_row = Some(index);
                            }
                        });
                    }
                });
            });

        if let Some(index) = clicked_row {
            self.list.select(index);
        }
        if let Some(index) = activated_row {
            self.list.select(index);
            self.edit_row(index);
        }
    }
}
