//! # Actions Module
//!
//! Event handlers behind every button and list interaction. Each handler is a
//! single request/response against the backend: it either updates the state
//! or leaves a message for the user explaining why it didn't.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Fill the list from storage and compute the total
//! - `add_expense()` - Validate the form and append a new expense
//! - `delete_selected()` - Remove the selected row from storage and the list
//! - `refresh_total()` - Recompute the running total
//! - `show_summary()` - Build the category chart and open its window
//! - `export_report()` - Write the PDF report
//! - `edit_row()` - Double-click hook
//! - `toggle_theme()` - Switch between dark and light

use log::{debug, error, info, warn};

use crate::backend::{today, ExpenseError};
use crate::ui::app_state::ExpenseTrackerApp;

impl ExpenseTrackerApp {
    /// Load every stored expense into the list and compute the total
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial data");

        match self.backend.expense_service.list_expenses() {
            Ok(expenses) => {
                info!("📊 Loaded {} expenses", expenses.len());
                self.list.set_rows(expenses);
            }
            Err(e) => self.show_error(&e),
        }
        self.refresh_total();
    }

    /// Validate the form and store a new expense dated today
    pub fn add_expense(&mut self) {
        let amount = match self
            .backend
            .form_service
            .parse_input(&self.form.name, &self.form.amount_text)
        {
            Ok(amount) => amount,
            Err(e) => {
                warn!("⚠️ Rejected expense input: name={:?} amount={:?}", self.form.name, self.form.amount_text);
                self.show_error(&e);
                return;
            }
        };

        match self
            .backend
            .expense_service
            .add_expense(&self.form.name, amount, self.form.category, today())
        {
            Ok(expense) => {
                self.list.push(expense);
                self.form.clear_inputs();
                self.refresh_total();
                self.ui.set_success("Expense added successfully!");
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Delete the selected expense by id
    pub fn delete_selected(&mut self) {
        let Some(expense) = self.list.selected_expense() else {
            self.show_error(&ExpenseError::NoSelection);
            return;
        };
        let id = expense.id.clone();

        match self.backend.expense_service.delete_expense(&id) {
            Ok(true) => {
                self.list.remove_selected();
                self.refresh_total();
            }
            Ok(false) => {
                // The file changed under us; show what it holds now
                self.load_initial_data();
                self.ui
                    .set_error("Not found", "The selected expense no longer exists in the expense file.");
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Recompute the running total from storage
    pub fn refresh_total(&mut self) {
        match self.backend.expense_service.total_spent() {
            Ok(total) => self.total = total,
            Err(e) => self.show_error(&e),
        }
    }

    /// Text of the total label
    pub fn total_text(&self) -> String {
        self.backend.form_service.format_total(self.total)
    }

    /// Build the category summary and open the chart window
    pub fn show_summary(&mut self) {
        match self.backend.chart_summary() {
            Ok(summary) => self.chart.show(summary),
            Err(e) => self.show_error(&e),
        }
    }

    /// Export all expenses to the PDF report
    pub fn export_report(&mut self) {
        match self.backend.export_document() {
            Ok(outcome) => {
                let message = self.backend.export_service.success_message(&outcome);
                self.ui.set_success(message);
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Row activation hook; editing in place is not supported
    pub fn edit_row(&mut self, index: usize) {
        debug!("✏️ Edit requested for row {}", index);
    }

    pub fn toggle_theme(&mut self) {
        self.ui.toggle_theme();
        info!("🎨 Switched to {} theme", if self.ui.dark_mode { "dark" } else { "light" });
    }

    fn show_error(&mut self, error: &ExpenseError) {
        match error {
            ExpenseError::Storage(_) | ExpenseError::Unexpected(_) => error!("❌ {}", error),
            _ => info!("ℹ️ {}", error),
        }
        self.ui.set_error(error.title(), error.to_string());
    }
}
