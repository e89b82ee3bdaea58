//! # Domain Module
//!
//! Contains all business logic for the expense tracker.
//!
//! The services here know nothing about egui. They take raw form input,
//! talk to an [`ExpenseStorage`](crate::backend::storage::ExpenseStorage)
//! implementation and hand back plain data for the UI to draw.
//!
//! ## Module Organization
//!
//! - **expense_service**: Adding, listing and deleting expenses plus the running totals
//! - **expense_form**: Validation of the add-expense form and amount formatting
//! - **summary_service**: Per-category bar chart data
//! - **export_service**: PDF report generation
//! - **errors**: The user-facing error type shared by all services
//!
//! ## Business Rules
//!
//! - An expense needs a non-empty name and an amount made only of digits
//! - New expenses are stamped with today's date
//! - Entries are kept in insertion order; duplicates are allowed
//! - The total and the chart are always recomputed from storage

pub mod errors;
pub mod expense_form;
pub mod expense_service;
pub mod export_service;
pub mod summary_service;

pub use errors::ExpenseError;
pub use expense_form::ExpenseFormService;
pub use expense_service::{today, ExpenseService};
pub use export_service::ExportService;
pub use summary_service::SummaryService;
