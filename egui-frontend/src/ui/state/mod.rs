//! # UI State Modules
//!
//! Component-specific state split out of the main app struct:
//! - `form_state` - add-expense form inputs
//! - `list_state` - visible rows and selection
//! - `ui_state` - feedback messages and theme
//! - `chart_state` - summary chart window

pub mod chart_state;
pub mod form_state;
pub mod list_state;
pub mod ui_state;

pub use chart_state::ChartState;
pub use form_state::FormState;
pub use list_state::ListState;
pub use ui_state::{UIState, UserMessage};
