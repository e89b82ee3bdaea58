//! # Storage Traits
//!
//! This module defines the storage abstraction used by the domain layer, so
//! services can be exercised against any backend that keeps entries in
//! insertion order.

use anyhow::Result;
use shared::{CategoryTotal, Expense, ExpenseCriteria};
use std::collections::BTreeMap;

/// Trait defining the interface for expense storage operations
///
/// Every call reloads the full collection; implementations keep no cache.
/// Callers must not run two writers against the same backing store.
pub trait ExpenseStorage {
    /// Append one expense, preserving insertion order
    fn append(&self, expense: &Expense) -> Result<()>;

    /// Remove every expense whose name, amount and category equal the criteria
    /// Returns the number of removed entries
    fn remove_matching(&self, criteria: &ExpenseCriteria) -> Result<usize>;

    /// Remove the expense with the given id
    /// Returns true if an entry was found and removed
    fn remove_by_id(&self, id: &str) -> Result<bool>;

    /// Load all expenses; a missing store is treated as empty
    fn load_all(&self) -> Result<Vec<Expense>>;

    /// Load all expenses, returning `None` when the store does not exist yet
    fn load_existing(&self) -> Result<Option<Vec<Expense>>>;

    /// Total amount across all expenses (0 when empty)
    fn sum(&self) -> Result<u64> {
        Ok(self
            .load_all()?
            .iter()
            .fold(0u64, |total, expense| total.saturating_add(expense.amount)))
    }

    /// Total amount per category present in the store, ordered by category label
    fn group_sum_by_category(&self) -> Result<Vec<CategoryTotal>> {
        Ok(group_by_category(&self.load_all()?))
    }
}

/// Sum amounts per distinct category; categories without entries are absent
pub fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for expense in expenses {
        let total = totals.entry(expense.category.as_str()).or_insert(0);
        *total = total.saturating_add(expense.amount);
    }

    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}
