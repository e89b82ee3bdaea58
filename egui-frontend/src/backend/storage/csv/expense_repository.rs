//! # CSV Expense Repository
//!
//! Reads and rewrites the whole expenses file on every call.
//!
//! ## Legacy files
//!
//! Older files may lack the `Date` column (rows get the `N/A` placeholder) or
//! the `Id` column (rows get fresh ids). Such files are migrated eagerly: the
//! backfilled rows are written back during the load that found them, so ids
//! stay stable from the first read on.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim, Writer};
use log::{debug, info, warn};
use serde::Deserialize;
use shared::{Expense, ExpenseCriteria, MISSING_DATE};
use std::fs::{self, OpenOptions};
use std::io::BufWriter;

use super::connection::{CsvConnection, EXPENSES_HEADER};
use crate::backend::storage::traits::ExpenseStorage;

/// Raw row as found in the expenses file
#[derive(Debug, Deserialize)]
struct ExpenseRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: u64,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Date", default = "missing_date")]
    date: String,
    #[serde(rename = "Id", default)]
    id: Option<String>,
}

fn missing_date() -> String {
    MISSING_DATE.to_string()
}

/// Rows read from disk plus whether the file needs rewriting in the current layout
struct LoadedExpenses {
    expenses: Vec<Expense>,
    needs_migration: bool,
}

/// CSV-based expense repository
#[derive(Debug, Clone)]
pub struct CsvExpenseRepository {
    connection: CsvConnection,
}

impl CsvExpenseRepository {
    /// Create a new CSV expense repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// The connection this repository reads from
    pub fn connection(&self) -> &CsvConnection {
        &self.connection
    }

    /// Read every row of the expenses file, or `None` if it does not exist
    fn read_file(&self) -> Result<Option<LoadedExpenses>> {
        let file_path = self.connection.file_path();
        if !self.connection.exists() {
            debug!("📂 No expenses file at {}", file_path.display());
            return Ok(None);
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_path(file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;

        let headers = reader.headers()?.clone();
        let has_date = headers.iter().any(|h| h == "Date");
        let has_id = headers.iter().any(|h| h == "Id");
        let mut needs_migration = !has_date || !has_id;

        let mut expenses = Vec::new();
        for (index, result) in reader.deserialize::<ExpenseRecord>().enumerate() {
            let record = result
                .with_context(|| format!("Malformed row {} in {}", index + 1, file_path.display()))?;

            let id = match record.id.filter(|id| !id.trim().is_empty()) {
                Some(id) => id,
                None => {
                    needs_migration = true;
                    uuid::Uuid::new_v4().to_string()
                }
            };

            expenses.push(Expense {
                id,
                name: record.name,
                amount: record.amount,
                category: record.category,
                date: record.date,
            });
        }

        Ok(Some(LoadedExpenses {
            expenses,
            needs_migration,
        }))
    }

    /// Read the expenses file, rewriting it in the current layout if it uses an older one
    fn read_expenses(&self) -> Result<Option<Vec<Expense>>> {
        match self.read_file()? {
            Some(loaded) if loaded.needs_migration => {
                info!(
                    "🔄 Migrating {} to the current layout ({} rows)",
                    self.connection.file_path().display(),
                    loaded.expenses.len()
                );
                // Parsed rows stay readable if the rewrite fails; the backfill
                // then lives in memory until the next successful write
                if let Err(e) = self.write_expenses(&loaded.expenses) {
                    warn!(
                        "⚠️ Could not migrate {}: {:#}",
                        self.connection.file_path().display(),
                        e
                    );
                }
                Ok(Some(loaded.expenses))
            }
            Some(loaded) => Ok(Some(loaded.expenses)),
            None => Ok(None),
        }
    }

    /// Write all expenses to the CSV file
    fn write_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let file_path = self.connection.file_path();

        // Write to a temporary file, then move it over the real one
        let temp_path = self.connection.temp_file_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create {}", temp_path.display()))?;

            let writer = BufWriter::new(file);
            let mut csv_writer = Writer::from_writer(writer);

            csv_writer.write_record(EXPENSES_HEADER)?;

            for expense in expenses {
                let amount = expense.amount.to_string();
                csv_writer.write_record([
                    expense.name.as_str(),
                    amount.as_str(),
                    expense.category.as_str(),
                    expense.date.as_str(),
                    expense.id.as_str(),
                ])?;
            }

            csv_writer.flush()?;
        }

        fs::rename(&temp_path, file_path)
            .with_context(|| format!("Failed to replace {}", file_path.display()))?;

        debug!("💾 Wrote {} expenses to {}", expenses.len(), file_path.display());
        Ok(())
    }
}

impl ExpenseStorage for CsvExpenseRepository {
    fn append(&self, expense: &Expense) -> Result<()> {
        let mut expenses = self.read_expenses()?.unwrap_or_default();
        expenses.push(expense.clone());
        self.write_expenses(&expenses)
    }

    fn remove_matching(&self, criteria: &ExpenseCriteria) -> Result<usize> {
        let Some(mut expenses) = self.read_expenses()? else {
            return Ok(0);
        };

        let initial_len = expenses.len();
        expenses.retain(|e| !e.matches(criteria));
        let removed = initial_len - expenses.len();
        if removed > 0 {
            self.write_expenses(&expenses)?;
        }
        Ok(removed)
    }

    fn remove_by_id(&self, id: &str) -> Result<bool> {
        let Some(mut expenses) = self.read_expenses()? else {
            return Ok(false);
        };

        let Some(index) = expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        expenses.remove(index);
        self.write_expenses(&expenses)?;
        Ok(true)
    }

    fn load_all(&self) -> Result<Vec<Expense>> {
        Ok(self.read_expenses()?.unwrap_or_default())
    }

    fn load_existing(&self) -> Result<Option<Vec<Expense>>> {
        self.read_expenses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use chrono::NaiveDate;
    use shared::{Category, CategoryTotal};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn expense(name: &str, amount: u64, category: Category) -> Expense {
        Expense::new(name, amount, category, day())
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        let lunch = expense("Lunch, with \"friends\"", 120, Category::Food);

        repo.append(&lunch).unwrap();
        let loaded = repo.load_all().unwrap();

        assert_eq!(loaded, vec![lunch]);
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();

        assert!(repo.load_all().unwrap().is_empty());
        assert!(repo.load_existing().unwrap().is_none());
        assert_eq!(repo.sum().unwrap(), 0);
        assert!(repo.group_sum_by_category().unwrap().is_empty());
        assert!(!env.data_file().exists());
    }

    #[test]
    fn test_append_writes_header_and_preserves_order() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        let names = ["Bus", "Rent", "Coffee"];

        for name in names {
            repo.append(&expense(name, 5, Category::Other)).unwrap();
        }

        let raw = env.read_raw().unwrap();
        assert!(raw.starts_with("Name,Amount,Category,Date,Id\n"));
        let loaded: Vec<String> = repo.load_all().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(loaded, names);
        assert!(!env.connection.temp_file_path().exists());
    }

    #[test]
    fn test_remove_matching_removes_every_duplicate() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        repo.append(&expense("Lunch", 120, Category::Food)).unwrap();
        repo.append(&expense("Bus", 30, Category::Transport)).unwrap();
        repo.append(&expense("Lunch", 120, Category::Food)).unwrap();
        repo.append(&expense("Lunch", 90, Category::Food)).unwrap();

        let criteria = ExpenseCriteria {
            name: "Lunch".to_string(),
            amount: 120,
            category: Category::Food.label().to_string(),
        };
        let removed = repo.remove_matching(&criteria).unwrap();

        let remaining = repo.load_all().unwrap();
        assert_eq!(removed, 2);
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|e| !e.matches(&criteria)));
    }

    #[test]
    fn test_remove_matching_on_missing_file_does_not_create_it() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        let criteria = ExpenseCriteria {
            name: "Lunch".to_string(),
            amount: 1,
            category: "Food 🍔".to_string(),
        };

        assert_eq!(repo.remove_matching(&criteria).unwrap(), 0);
        assert!(!env.data_file().exists());
    }

    #[test]
    fn test_remove_by_id_removes_exactly_one_duplicate() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        let first = expense("Lunch", 120, Category::Food);
        let second = expense("Lunch", 120, Category::Food);
        repo.append(&first).unwrap();
        repo.append(&second).unwrap();

        assert!(repo.remove_by_id(&first.id).unwrap());
        assert!(!repo.remove_by_id(&first.id).unwrap());

        assert_eq!(repo.load_all().unwrap(), vec![second]);
    }

    #[test]
    fn test_sum_and_group_by_category() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        repo.append(&expense("A", 10, Category::Food)).unwrap();
        repo.append(&expense("B", 5, Category::Food)).unwrap();
        repo.append(&expense("C", 7, Category::Bills)).unwrap();

        assert_eq!(repo.sum().unwrap(), 22);
        assert_eq!(
            repo.group_sum_by_category().unwrap(),
            vec![
                CategoryTotal { category: "Bills 💡".to_string(), total: 7 },
                CategoryTotal { category: "Food 🍔".to_string(), total: 15 },
            ]
        );
    }

    #[test]
    fn test_legacy_file_without_date_is_backfilled_and_migrated() {
        let env = TestEnvironment::new().unwrap();
        env.write_raw("Name,Amount,Category\nTea,20,Food 🍔\nTaxi,150,Transport 🚗\n").unwrap();
        let repo = env.repository();

        let first_load = repo.load_all().unwrap();
        assert_eq!(first_load.len(), 2);
        assert!(first_load.iter().all(|e| e.date == MISSING_DATE));

        // The migration is written immediately, so ids survive a reload
        let raw = env.read_raw().unwrap();
        assert!(raw.starts_with("Name,Amount,Category,Date,Id\n"));
        assert_eq!(repo.load_all().unwrap(), first_load);
    }

    #[test]
    fn test_legacy_file_still_loads_when_migration_cannot_be_written() {
        let env = TestEnvironment::new().unwrap();
        let legacy = "Name,Amount,Category,Date\nTea,20,Food 🍔,2024-01-02\n";
        env.write_raw(legacy).unwrap();
        // A directory in the way of the scratch file makes the rewrite fail
        fs::create_dir(env.connection.temp_file_path()).unwrap();
        let repo = env.repository();

        let loaded = repo.load_all().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Tea");
        assert_eq!(loaded[0].date, "2024-01-02");
        assert!(!loaded[0].id.is_empty());
        assert_eq!(repo.sum().unwrap(), 20);
        assert_eq!(env.read_raw().unwrap(), legacy);
    }

    #[test]
    fn test_header_with_spaces_is_accepted() {
        let env = TestEnvironment::new().unwrap();
        env.write_raw("Name, Amount, Category, Date\nTea,20,Food 🍔,2024-01-02\n").unwrap();
        let repo = env.repository();

        let loaded = repo.load_all().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Tea");
        assert_eq!(loaded[0].amount, 20);
        assert_eq!(loaded[0].date, "2024-01-02");
    }

    #[test]
    fn test_unknown_category_is_kept_as_is() {
        let env = TestEnvironment::new().unwrap();
        env.write_raw("Name,Amount,Category,Date,Id\nGift,40,Presents,2024-01-02,abc\n").unwrap();
        let repo = env.repository();

        let loaded = repo.load_all().unwrap();

        assert_eq!(loaded[0].category, "Presents");
        assert_eq!(loaded[0].id, "abc");
    }

    #[test]
    fn test_non_numeric_amount_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        env.write_raw("Name,Amount,Category,Date,Id\nGift,lots,Other 📝,2024-01-02,abc\n").unwrap();
        let repo = env.repository();

        assert!(repo.load_all().is_err());
    }
}
