//! # Backend Module
//!
//! Contains all non-UI logic for the expense tracker.
//!
//! ```text
//! UI Layer (egui)
//!     ↓
//! Domain Layer (services, validation, reports)
//!     ↓
//! Storage Layer (CSV file)
//! ```
//!
//! [`Backend`] wires the services to a CSV repository built from the
//! [`AppConfig`]; the UI holds one instance for its whole lifetime.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::{ChartSummary, ExportOutcome};

use crate::config::AppConfig;
pub use domain::{today, ExpenseError, ExpenseFormService, ExpenseService, ExportService, SummaryService};
pub use storage::{CsvConnection, CsvExpenseRepository, ExpenseStorage};

/// All services used by the UI
#[derive(Debug, Clone)]
pub struct Backend {
    pub expense_service: ExpenseService<CsvExpenseRepository>,
    pub form_service: ExpenseFormService,
    pub summary_service: SummaryService,
    pub export_service: ExportService,
}

impl Backend {
    /// Initialize the backend with all required services
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("💾 Setting up CSV storage at {}", config.data_file.display());
        let connection = CsvConnection::new(&config.data_file)?;
        let repository = CsvExpenseRepository::new(connection);

        info!("⚙️ Setting up domain services");
        Ok(Self {
            expense_service: ExpenseService::new(repository),
            form_service: ExpenseFormService::new(config.currency_symbol.clone()),
            summary_service: SummaryService::new(config.currency_symbol.clone()),
            export_service: ExportService::new(config.report_file.clone(), config.currency_code.clone()),
        })
    }

    /// Chart data for the summary window, with freshly randomised colors
    pub fn chart_summary(&self) -> Result<ChartSummary, ExpenseError> {
        self.summary_service
            .chart_summary(self.expense_service.storage(), &mut rand::thread_rng())
    }

    /// Write the PDF report for everything currently stored
    pub fn export_document(&self) -> Result<ExportOutcome, ExpenseError> {
        self.export_service.export_document(self.expense_service.storage())
    }
}
