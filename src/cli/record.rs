//! Record CLI commands
//!
//! Adding, listing and deleting expenses.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_money, format_record_details, format_record_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Record, RecordId};
use crate::services::LedgerStore;

/// Arguments for adding an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,
    /// Amount, e.g. "25000" or "25000.50"
    #[arg(allow_negative_numbers = true)]
    pub amount: String,
    /// Category (defaults to the first configured category)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Add an expense
pub fn handle_add(store: &LedgerStore, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount '{}'. Use a plain number like '25000' or '25000.50'. Error: {}",
            args.amount, e
        ))
    })?;

    let date = match args.date {
        Some(date_str) => parse_date(&date_str)?,
        None => Local::now().date_naive(),
    };

    let category = match args.category {
        Some(name) => resolve_category(store, &name)?,
        None => settings
            .default_category()
            .map(str::to_string)
            .ok_or_else(|| LedgerError::Config("No categories configured".into()))?,
    };

    let record = store.try_add(Record::new(args.description, amount, category, date))?;

    println!(
        "Saved expense #{}: {} ({}, {})",
        record.id.map(|id| id.to_string()).unwrap_or_default(),
        record.description,
        record.category,
        format_money(record.amount, &settings.currency_symbol)
    );

    Ok(())
}

/// List all expenses
pub fn handle_list(store: &LedgerStore, settings: &Settings) -> LedgerResult<()> {
    let records = store.list()?;
    print!("{}", format_record_table(&records, settings));
    Ok(())
}

/// Delete an expense; without `force` only shows what would be deleted
pub fn handle_delete(
    store: &LedgerStore,
    settings: &Settings,
    id: RecordId,
    force: bool,
) -> LedgerResult<()> {
    let record = store
        .get(id)?
        .ok_or_else(|| LedgerError::record_not_found(id.to_string()))?;

    if !force {
        println!("About to delete expense:");
        print!("{}", format_record_details(&record, settings));
        println!();
        println!("Use --force to confirm deletion");
        return Ok(());
    }

    let deleted = store.try_delete(id)?;
    println!("Deleted expense #{}: {}", id, deleted.description);
    Ok(())
}

/// List configured categories
pub fn handle_categories(store: &LedgerStore) {
    for category in store.categories() {
        println!("{}", category);
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(date_str: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

/// Map user input to a configured category label, ignoring case
fn resolve_category(store: &LedgerStore, name: &str) -> LedgerResult<String> {
    let name = name.trim();
    store
        .categories()
        .iter()
        .find(|c| c.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| {
            LedgerError::Validation(format!(
                "Unknown category '{}'. Run 'expense categories' to see the options",
                name
            ))
        })
}
