//! Input file reading
//!
//! The whole dump is read into memory and decoded before any projection
//! starts, so a malformed file never produces partial output.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::models::TransactionRecord;

/// Read and decode a JSON transaction dump
///
/// The top-level value must be an array of objects.
pub fn read_records<P: AsRef<Path>>(path: P) -> ExportResult<Vec<TransactionRecord>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| ExportError::io_at(path, e))?;
    let records = parse_records(&contents).map_err(|e| ExportError::json_at(path, e))?;

    debug!(path = %path.display(), records = records.len(), "decoded transaction dump");
    Ok(records)
}

/// Decode a JSON transaction dump held in memory
pub fn parse_records(contents: &str) -> Result<Vec<TransactionRecord>, serde_json::Error> {
    let objects: Vec<Map<String, Value>> = serde_json::from_str(contents)?;
    Ok(objects.into_iter().map(TransactionRecord::from).collect())
}
