//! # Application Configuration
//!
//! Optional YAML settings read from `expense_tracker.yaml` in the working
//! directory. Every field has a default, so a missing file (or a file that
//! only sets a few keys) is fine.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_file: "expenses.csv"
//! report_file: "Expense_Report.pdf"
//! currency_symbol: "₹"
//! currency_code: "INR"
//! dark_mode: true
//! window_width: 600.0
//! window_height: 650.0
//! ```

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "expense_tracker.yaml";

/// Application-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV file holding all expenses
    pub data_file: PathBuf,
    /// Fixed output path of the exported report
    pub report_file: PathBuf,
    /// Symbol shown next to amounts in the window and chart
    pub currency_symbol: String,
    /// Code used in the exported report, where the symbol may not render
    pub currency_code: String,
    /// Start in the dark theme
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("expenses.csv"),
            report_file: PathBuf::from("Expense_Report.pdf"),
            currency_symbol: "₹".to_string(),
            currency_code: "INR".to_string(),
            dark_mode: true,
            window_width: 600.0,
            window_height: 650.0,
        }
    }
}

impl AppConfig {
    /// Load the configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?;
        Ok(config)
    }

    /// Load `expense_tracker.yaml` from the working directory, falling back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from_dir_or_default(Path::new("."))
    }

    /// Load the config file from `dir`, falling back to defaults when it is
    /// missing or unreadable
    pub fn load_from_dir_or_default(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            info!("⚙️ No {} found, using default configuration", CONFIG_FILE_NAME);
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("⚙️ Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("⚠️ {:#}. Using default configuration.", e);
                Self::default()
            }
        }
    }
}
