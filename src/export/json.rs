//! JSON export of ledger records with schema versioning

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Record};
use crate::services::LedgerStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Complete ledger export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Crate version that produced the file
    pub app_version: String,
    /// Categories configured at export time
    pub categories: Vec<String>,
    pub records: Vec<Record>,
    pub total: Money,
}

impl LedgerExport {
    /// Snapshot the store
    pub fn from_store(store: &LedgerStore) -> LedgerResult<Self> {
        let records = store.list()?;
        let total = Money::checked_sum(records.iter().map(|r| r.amount))
            .ok_or_else(LedgerError::total_overflow)?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: store.categories().to_vec(),
            records,
            total,
        })
    }
}

/// Export the full ledger as pretty-printed JSON
pub fn export_records_json<W: Write>(store: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(format!("Failed to serialize export: {}", e)))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(
            temp_dir.path().join("records.json"),
            ["Makanan", "Transport"],
        );
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        store.add(Record::new("Makan siang", Money::from_units(25_000), "Makanan", date));
        store.add(Record::new("Bensin", Money::from_units(50_000), "Transport", date));

        let mut out = Vec::new();
        export_records_json(&store, &mut out).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.total, Money::from_units(75_000));
        assert_eq!(parsed.categories, vec!["Makanan", "Transport"]);
    }
}
