//! Service layer for the expense ledger
//!
//! Business rules on top of the storage layer: validation, id assignment
//! and aggregation.

pub mod ledger;

pub use ledger::LedgerStore;
