//! Core data models for the expense ledger

pub mod ids;
pub mod money;
pub mod record;

pub use ids::RecordId;
pub use money::{Money, MoneyParseError};
pub use record::Record;
