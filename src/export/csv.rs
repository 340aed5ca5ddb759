//! CSV Export functionality
//!
//! Writes expense rows as comma-delimited UTF-8 with a fixed header,
//! minimal quoting and `\r\n` record terminators.

use std::io::Write;

use crate::error::ExportResult;
use crate::models::{ExpenseRow, EXPENSE_HEADERS};

/// Write the header followed by one record per expense row
pub fn write_expenses_csv<W: Write>(writer: W, rows: &[ExpenseRow]) -> ExportResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(EXPENSE_HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
