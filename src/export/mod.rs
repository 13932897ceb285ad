//! Export module for the expense ledger
//!
//! - CSV: one row per record, for spreadsheets
//! - JSON: full snapshot with schema version, for machines

pub mod csv;
pub mod json;

pub use csv::export_records_csv;
pub use json::{export_records_json, LedgerExport, EXPORT_SCHEMA_VERSION};
