//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_records_csv, export_records_json};
use crate::services::LedgerStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON, full snapshot with categories and total
    Json,
}

/// Arguments for exporting the ledger
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,
    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Export all expenses
pub fn handle_export(store: &LedgerStore, args: ExportArgs) -> LedgerResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(store, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(store, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    store: &LedgerStore,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_records_csv(store, writer),
        ExportFormat::Json => export_records_json(store, writer),
    }
}
