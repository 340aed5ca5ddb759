//! User settings for expense-export
//!
//! The settings file is optional and only tunes diagnostics; the exported
//! CSV never depends on it.

use serde::{Deserialize, Serialize};

use super::paths::ExporterPaths;
use crate::error::ExportError;

/// User settings for expense-export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "expense_export=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExporterPaths) -> Result<Self, ExportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            ExportError::Config(format!(
                "Failed to read settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            ExportError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })
    }
}
