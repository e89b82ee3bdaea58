//! # List State Module
//!
//! The rows shown in the expense list and the current single-row selection.
//! The list mirrors the store: rows are pushed after a successful append and
//! removed after a successful delete, so it never needs a full reload.

use shared::Expense;

/// Visible expense rows with an optional selected row
#[derive(Debug, Default)]
pub struct ListState {
    pub rows: Vec<Expense>,
    pub selected: Option<usize>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row, dropping the selection
    pub fn set_rows(&mut self, rows: Vec<Expense>) {
        self.rows = rows;
        self.selected = None;
    }

    pub fn push(&mut self, expense: Expense) {
        self.rows.push(expense);
    }

    /// Select a row; out-of-range indices clear the selection
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.rows.len()).then_some(index);
    }

    /// The currently selected expense, if any
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    /// Remove the selected row and clear the selection
    pub fn remove_selected(&mut self) -> Option<Expense> {
        let index = self.selected.take()?;
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::Category;

    fn expense(name: &str) -> Expense {
        Expense::new(name, 10, Category::Food, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_remove_selected_removes_only_that_row() {
        let mut list = ListState::new();
        list.set_rows(vec![expense("A"), expense("B"), expense("C")]);
        list.select(1);

        let removed = list.remove_selected().unwrap();

        assert_eq!(removed.name, "B");
        let names: Vec<&str> = list.rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(list.selected, None);
    }

    #[test]
    fn test_select_out_of_range_clears_selection() {
        let mut list = ListState::new();
        list.push(expense("A"));
        list.select(0);
        list.select(5);

        assert_eq!(list.selected, None);
        assert!(list.remove_selected().is_none());
        assert_eq!(list.rows.len(), 1);
    }
}
