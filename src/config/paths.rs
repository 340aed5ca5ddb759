//! Path management for expense-export
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_EXPORT_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory for `expense-export`
//!    (`~/.config/expense-export` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExportError;

/// Environment variable that overrides the settings directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_EXPORT_CONFIG_DIR";

/// Locates the files expense-export reads its settings from
#[derive(Debug, Clone)]
pub struct ExporterPaths {
    base_dir: PathBuf,
}

impl ExporterPaths {
    /// Create a new ExporterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, ExportError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExporterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

fn resolve_default_path() -> Result<PathBuf, ExportError> {
    ProjectDirs::from("", "", "expense-export")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExportError::Config("Could not determine a config directory".into()))
}
