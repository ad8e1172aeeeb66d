//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_expenses_csv, export_full_json, export_summary_csv};
use crate::reports::SummaryReport;
use crate::storage::{ExpenseStore, KeyValueStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON, every group and expense
    Json,
}

/// Handle the export command
///
/// Writes to `output` when given, otherwise to stdout. With `summary` the
/// CSV holds category and group totals instead of expenses.
pub fn handle_export_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    format: ExportFormat,
    output: Option<PathBuf>,
    summary: bool,
) -> LedgerResult<()> {
    if summary && format != ExportFormat::Csv {
        return Err(LedgerError::Export(
            "--summary is only available for CSV export".to_string(),
        ));
    }

    let state = store.snapshot()?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv if summary => {
            export_summary_csv(&SummaryReport::generate(&state), &mut writer)?;
        }
        ExportFormat::Csv => export_expenses_csv(&state, &mut writer)?,
        ExportFormat::Json => export_full_json(&state, &mut writer)?,
    }
    writer.flush()?;
    drop(writer);

    if let Some(path) = output {
        eprintln!(
            "Exported {} groups and {} expenses to: {}",
            state.groups.len(),
            state.expenses.len(),
            path.display()
        );
    }

    Ok(())
}
