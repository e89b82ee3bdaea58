//! # UI Components Module
//!
//! ## Module Organization:
//! - `actions` - Event handlers for buttons and list interaction
//! - `header` - Title, total label and the action button row
//! - `expense_form` - Name, amount and category inputs
//! - `expense_table` - Expense list with row selection
//! - `summary_chart` - Category bar chart
//! - `theme` - Dark/light visuals and accent colors

pub mod actions;
pub mod expense_form;
pub mod expense_table;
pub mod header;
pub mod summary_chart;
pub mod theme;

pub use summary_chart::render_summary_chart;
pub use theme::apply_theme;
