//! Expense domain logic.
//!
//! Thin orchestration over [`ExpenseStorage`]: creating entries, deleting them
//! by id or by value criteria, and the running total / per-category sums. Each
//! call goes back to storage; nothing is cached between calls.

use chrono::{Local, NaiveDate};
use log::{info, warn};
use shared::{Category, CategoryTotal, Expense, ExpenseCriteria};

use super::errors::ExpenseError;
use crate::backend::storage::ExpenseStorage;

/// Today's date in local time, used to stamp new expenses
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Service that handles expense CRUD and aggregation
#[derive(Debug, Clone)]
pub struct ExpenseService<S: ExpenseStorage> {
    storage: S,
}

impl<S: ExpenseStorage> ExpenseService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage, used by the report generators
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create and store a new expense stamped with `date`
    pub fn add_expense(
        &self,
        name: &str,
        amount: u64,
        category: Category,
        date: NaiveDate,
    ) -> Result<Expense, ExpenseError> {
        let expense = Expense::new(name, amount, category, date);
        self.storage.append(&expense)?;
        info!("➕ Added expense '{}' ({}, {}) on {}", expense.name, expense.amount, expense.category, expense.date);
        Ok(expense)
    }

    /// All stored expenses in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.storage.load_all()?)
    }

    /// Delete a single expense by id
    pub fn delete_expense(&self, id: &str) -> Result<bool, ExpenseError> {
        let deleted = self.storage.remove_by_id(id)?;
        if deleted {
            info!("🗑️ Deleted expense {}", id);
        } else {
            warn!("⚠️ Expense {} was not found in storage", id);
        }
        Ok(deleted)
    }

    /// Delete every expense matching the criteria, returning how many were removed
    pub fn delete_matching(&self, criteria: &ExpenseCriteria) -> Result<usize, ExpenseError> {
        let removed = self.storage.remove_matching(criteria)?;
        info!(
            "🗑️ Removed {} expenses matching '{}' / {} / '{}'",
            removed, criteria.name, criteria.amount, criteria.category
        );
        Ok(removed)
    }

    /// Running total of all amounts
    pub fn total_spent(&self) -> Result<u64, ExpenseError> {
        Ok(self.storage.sum()?)
    }

    /// Per-category totals, ordered by category label
    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>, ExpenseError> {
        Ok(self.storage.group_sum_by_category()?)
    }
}
