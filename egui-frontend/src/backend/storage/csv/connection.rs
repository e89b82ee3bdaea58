use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Header written at the top of the expenses file
pub const EXPENSES_HEADER: [&str; 5] = ["Name", "Amount", "Category", "Date", "Id"];

/// CsvConnection owns the location of the expenses file
#[derive(Debug, Clone)]
pub struct CsvConnection {
    file_path: PathBuf,
}

impl CsvConnection {
    /// Create a new connection for the given expenses file
    ///
    /// The file itself is not created; a missing file reads as an empty store.
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();

        // Create the containing directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
                info!("📁 Created data directory: {}", parent.display());
            }
        }

        Ok(Self { file_path })
    }

    /// Path of the expenses file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Path of the scratch file used while rewriting the expenses file
    pub fn temp_file_path(&self) -> PathBuf {
        self.file_path.with_extension("tmp")
    }

    /// Whether the expenses file exists yet
    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }
}
