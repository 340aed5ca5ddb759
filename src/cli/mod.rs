//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the service layer.

pub mod export;

pub use export::{handle_export_command, run_export, ExportOutcome};
