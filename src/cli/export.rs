//! CLI handler for the JSON to CSV conversion run
//!
//! Reads the whole dump, projects expense entries, and writes the CSV only
//! when at least one expense was found.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ExportError, ExportResult};
use crate::export::write_expenses_csv;
use crate::services::ExpenseService;
use crate::storage::read_records;

/// What a conversion run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// `count` rows were written to `path`
    Exported { count: usize, path: PathBuf },
    /// The dump held no expense entries; nothing was written
    NoExpenses,
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exported { count, path } => write!(
                f,
                "Successfully exported {} expenses to {}",
                count,
                path.display()
            ),
            Self::NoExpenses => write!(f, "No EXPENSE entries found in the JSON file"),
        }
    }
}

/// Convert `input` to `output` without printing anything
pub fn run_export(input: &Path, output: &Path) -> ExportResult<ExportOutcome> {
    let records = read_records(input)?;

    let service = ExpenseService::new();
    let (rows, summary) = service.project_all(&records);

    if rows.is_empty() {
        warn!(
            input = %input.display(),
            records = summary.records_seen,
            "no expense entries; output not written"
        );
        return Ok(ExportOutcome::NoExpenses);
    }

    let file = File::create(output).map_err(|e| {
        ExportError::Io(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    write_expenses_csv(&mut writer, &rows)?;
    writer
        .flush()
        .map_err(|e| ExportError::io_at(output, e))?;

    info!(output = %output.display(), rows = rows.len(), "wrote expense csv");

    Ok(ExportOutcome::Exported {
        count: rows.len(),
        path: output.to_path_buf(),
    })
}

/// Handle the conversion command and report the result on stdout
pub fn handle_export_command(input: &Path, output: &Path) -> ExportResult<ExportOutcome> {
    let outcome = run_export(input, output)?;
    println!("{}", outcome);
    Ok(outcome)
}
