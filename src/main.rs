use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use expense_export::cli::handle_export_command;
use expense_export::config::{ExporterPaths, Settings};
use expense_export::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "expense-export",
    version,
    about = "Export EXPENSE entries from a JSON transaction dump to CSV",
    long_about = "Reads a JSON array of transaction records, keeps the entries whose \
                  type is EXPENSE, normalizes their categories and dates, and writes \
                  them as Account,Category,Amount,Date,Description rows."
)]
struct Cli {
    /// Path to input JSON file
    input_file: PathBuf,

    /// Path to output CSV file
    output_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings only tune logging, so a bad settings file never blocks a conversion.
    let loaded = ExporterPaths::new().and_then(|paths| Settings::load_or_default(&paths));
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&settings.log_filter);
    if let Err(e) = &loaded {
        warn!(error = %e, "ignoring settings; using defaults");
    }

    handle_export_command(&cli.input_file, &cli.output_file).with_context(|| {
        format!(
            "Failed to export {} to {}",
            cli.input_file.display(),
            cli.output_file.display()
        )
    })?;

    Ok(())
}
