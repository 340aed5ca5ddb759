//! Configuration module for expense-export
//!
//! This module provides configuration management including:
//! - Settings directory resolution
//! - Optional settings file with defaults

pub mod paths;
pub mod settings;

pub use paths::ExporterPaths;
pub use settings::Settings;
