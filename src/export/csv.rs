//! CSV export of ledger records

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::services::LedgerStore;

/// Export all records to CSV, one row per record in id order
pub fn export_records_csv<W: Write>(store: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let records = store.list()?;

    writeln!(writer, "ID,Date,Description,Category,Amount")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        let id = record.id.map(|id| id.to_string()).unwrap_or_default();

        writeln!(
            writer,
            "{},{},{},{},{}",
            id,
            record.date.format("%Y-%m-%d"),
            escape_csv(&record.description),
            escape_csv(&record.category),
            record.amount
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Record};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_records() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("records.json"), ["Makanan"]);
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        store.add(Record::new("Nasi, ayam", Money::from_units(25_000), "Makanan", date));
        store.add(Record::new("Teh \"manis\"", Money::from_cents(350_050), "Makanan", date));

        let mut out = Vec::new();
        export_records_csv(&store, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Description,Category,Amount");
        assert_eq!(lines[1], "1,2024-01-10,\"Nasi, ayam\",Makanan,25000");
        assert_eq!(lines[2], "2,2024-01-10,\"Teh \"\"manis\"\"\",Makanan,3500.50");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("line\nbreak"), "\"line\nbreak\"");
    }
}
