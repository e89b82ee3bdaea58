//! # Expense Tracker
//!
//! A small desktop expense tracker built on egui. Expenses are kept in a CSV
//! file; the app can show a per-category bar chart and export a PDF report.
//!
//! - [`config`] - optional YAML settings
//! - [`backend`] - storage and domain services, independent of the UI
//! - [`ui`] - the egui application

pub mod backend;
pub mod config;
pub mod ui;
