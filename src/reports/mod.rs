//! Reports built on top of the ledger store

pub mod summary;

pub use summary::{CategorySpending, ExpenditureSummary};
