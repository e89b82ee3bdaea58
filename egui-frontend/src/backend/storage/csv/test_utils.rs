//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! This module provides RAII-based cleanup that guarantees test data is removed
//! even if tests panic or fail.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use anyhow::Result;
use super::connection::CsvConnection;
use super::expense_repository::CsvExpenseRepository;

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(base_path.join("expenses.csv"))?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// A repository over this environment's expenses file
    pub fn repository(&self) -> CsvExpenseRepository {
        CsvExpenseRepository::new(self.connection.clone())
    }

    /// Path of the expenses file
    pub fn data_file(&self) -> &Path {
        self.connection.file_path()
    }

    /// Write raw CSV content to the expenses file, e.g. a legacy layout
    pub fn write_raw(&self, content: &str) -> Result<()> {
        fs::write(self.data_file(), content)?;
        Ok(())
    }

    /// Read the expenses file back as text
    pub fn read_raw(&self) -> Result<String> {
        Ok(fs::read_to_string(self.data_file())?)
    }
}
