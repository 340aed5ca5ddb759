//! Custom error types for expense-export
//!
//! This module defines the error hierarchy for the exporter using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense-export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON decoding errors (malformed input or wrong shape)
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV encoding errors
    #[error("CSV error: {0}")]
    Csv(String),
}

impl ExportError {
    /// Create an I/O error that names the file involved
    pub fn io_at(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::Io(format!("{}: {}", path.display(), err))
    }

    /// Create a JSON error that names the file involved
    pub fn json_at(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::Json(format!("{}: {}", path.display(), err))
    }

    /// Check if this is a malformed-input error
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense-export operations
pub type ExportResult<T> = Result<T, ExportError>;
