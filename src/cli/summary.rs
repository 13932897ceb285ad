//! Summary and history CLI commands

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::LedgerResult;
use crate::reports::ExpenditureSummary;
use crate::services::LedgerStore;

use super::record::parse_date;

/// Which records a summary covers
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Only today's expenses
    #[arg(long, conflicts_with = "date")]
    pub today: bool,
    /// Only expenses on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Show total and per-category spending
pub fn handle_summary(
    store: &LedgerStore,
    settings: &Settings,
    args: SummaryArgs,
) -> LedgerResult<()> {
    let date = if args.today {
        Some(Local::now().date_naive())
    } else {
        args.date.as_deref().map(parse_date).transpose()?
    };

    let summary = ExpenditureSummary::generate(store, date)?;
    print!("{}", format_summary(&summary, settings));
    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history(store: &LedgerStore, count: usize) -> LedgerResult<()> {
    let entries = match store.audit_log() {
        Some(logger) => logger.read_recent(count)?,
        None => Vec::new(),
    };

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
