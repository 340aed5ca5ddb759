//! expense-export - turn a JSON transaction dump into an expense CSV
//!
//! The library reads a JSON array of transaction records, keeps the ones
//! whose `type` is `"EXPENSE"`, normalizes their categories and dates, and
//! writes them as `Account,Category,Amount,Date,Description` rows.
//!
//! # Architecture
//!
//! - `config`: settings directory and optional settings file
//! - `error`: custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: input records, output rows, category table
//! - `services`: date formatting and expense projection
//! - `storage`: reading the input dump
//! - `export`: CSV encoding
//! - `cli`: the conversion run behind the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_export::{storage::read_records, services::project_expenses};
//!
//! let records = read_records("transactions.json")?;
//! let rows = project_expenses(&records);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExportError, ExportResult};
