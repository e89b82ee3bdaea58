//! # CSV Storage
//!
//! File-based storage keeping every expense in a single CSV file.
//!
//! ## File Format
//!
//! ```text
//! Name,Amount,Category,Date,Id
//! Lunch,120,Food 🍔,2024-03-09,4f0c6a8e-...
//! ```
//!
//! Files written before the `Date` or `Id` columns existed are still read;
//! see [`expense_repository`] for how they are migrated.

pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use expense_repository::CsvExpenseRepository;
