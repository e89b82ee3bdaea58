//! # Storage Module
//!
//! Persistence for expense entries. The domain layer only sees the
//! [`ExpenseStorage`] trait; the CSV implementation lives in [`csv`].

pub mod csv;
pub mod traits;

pub use self::csv::{CsvConnection, CsvExpenseRepository};
pub use traits::ExpenseStorage;
