//! Terminal display formatting
//!
//! Renders records and summaries for the CLI. Nothing here touches storage.

pub mod money;
pub mod record;
pub mod summary;

pub use money::format_money;
pub use record::{format_record_details, format_record_table};
pub use summary::format_summary;
