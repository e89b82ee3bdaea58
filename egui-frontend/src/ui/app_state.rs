//! # App State Module
//!
//! This module defines the central application state and its initialization.
//!
//! ## Key Types:
//! - `ExpenseTrackerApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Build the app from an eframe creation context and config
//! - `with_backend()` - Build the app around an existing backend (no egui context needed)
//!
//! ## State Management:
//! All state lives in one struct, split into per-component state types. The
//! event handlers in `components::actions` are the only code that mutates it.

use log::info;

use crate::backend::Backend;
use crate::config::AppConfig;
use crate::ui::state::{ChartState, FormState, ListState, UIState};

/// Main application struct for the egui expense tracker
pub struct ExpenseTrackerApp {
    pub backend: Backend,

    pub form: FormState,
    pub list: ListState,
    pub ui: UIState,
    pub chart: ChartState,

    /// Last computed total of all amounts
    pub total: u64,
}

impl ExpenseTrackerApp {
    /// Create the app for the given eframe context and configuration
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> anyhow::Result<Self> {
        info!("🚀 Initializing ExpenseTrackerApp");

        let backend = Backend::new(config)?;
        let app = Self::with_backend(backend, config.dark_mode);
        crate::ui::components::apply_theme(&cc.egui_ctx, app.ui.dark_mode);

        Ok(app)
    }

    /// Create the app around an existing backend and run the initial load
    pub fn with_backend(backend: Backend, dark_mode: bool) -> Self {
        let mut app = Self {
            backend,
            form: FormState::new(),
            list: ListState::new(),
            ui: UIState::new(dark_mode),
            chart: ChartState::new(),
            total: 0,
        };
        app.load_initial_data();
        app
    }
}
