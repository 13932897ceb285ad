//! Record display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::money::format_money;
use crate::config::Settings;
use crate::models::Record;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl RecordRow {
    fn new(record: &Record, settings: &Settings) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
            date: record.date.format(&settings.date_format).to_string(),
            description: truncate(&record.description, 40),
            category: record.category.clone(),
            amount: format_money(record.amount, &settings.currency_symbol),
        }
    }
}

/// Format records as a table, in the order given
pub fn format_record_table(records: &[Record], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow::new(r, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}

/// Format a single record for a confirmation prompt
pub fn format_record_details(record: &Record, settings: &Settings) -> String {
    let mut output = String::new();

    if let Some(id) = record.id {
        output.push_str(&format!("Record:      #{}\n", id));
    }
    output.push_str(&format!(
        "Date:        {}\n",
        record.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Description: {}\n", record.description));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_money(record.amount, &settings.currency_symbol)
    ));

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordId};
    use chrono::NaiveDate;

    fn persisted(id: u64, description: &str) -> Record {
        let mut record = Record::new(
            description,
            Money::from_units(25_000),
            "Makanan",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        record.id = Some(RecordId::new(id));
        record
    }

    #[test]
    fn test_empty_table() {
        let output = format_record_table(&[], &Settings::default());
        assert_eq!(output, "No expenses recorded yet.\n");
    }

    #[test]
    fn test_table_contents() {
        let records = vec![persisted(1, "Makan siang"), persisted(2, "Es teh")];
        let output = format_record_table(&records, &Settings::default());

        assert!(output.contains("Description"));
        assert!(output.contains("10 Jan 2024"));
        assert!(output.contains("Makan siang"));
        assert!(output.contains("Rp 25.000"));
    }

    #[test]
    fn test_details() {
        let output = format_record_details(&persisted(3, "Bakso"), &Settings::default());

        assert!(output.starts_with("Record:      #3\n"));
        assert!(output.contains("Amount:      Rp 25.000"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer description", 10), "a much ...");
        assert_eq!(truncate("kopi susu gula aren", 9), "kopi s...");
    }
}
