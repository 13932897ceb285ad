//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the ledger store.

pub mod export;
pub mod record;
pub mod summary;

pub use export::{handle_export, ExportArgs, ExportFormat};
pub use record::{handle_add, handle_categories, handle_delete, handle_list, AddArgs};
pub use summary::{handle_history, handle_summary, SummaryArgs};
