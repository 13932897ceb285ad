//! Expense Ledger - personal daily-expense tracking
//!
//! Records individual spending events (description, amount, category, date),
//! lets them be listed and deleted, and totals them overall, per day and per
//! category.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings (including the category set)
//! - `error`: Custom error types
//! - `models`: Records, ids and money
//! - `storage`: JSON file storage with atomic rewrites
//! - `services`: The ledger store (validation, ids, aggregation)
//! - `audit`: Append-only log of additions and deletions
//! - `reports`: Expenditure summaries
//! - `export`: CSV and JSON export
//! - `display`, `cli`: Terminal front end used by the `expense` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use expense_ledger::models::{Money, Record};
//! use expense_ledger::services::LedgerStore;
//!
//! let store = LedgerStore::new("records.json".into(), ["Makanan", "Transport"]);
//! let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//!
//! assert!(store.add(Record::new("Makan siang", Money::from_units(25_000), "Makanan", date)));
//! let total = store.total_expenditure(Some(date)).unwrap();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::{Money, Record, RecordId};
pub use services::LedgerStore;
