//! Audit logging for the expense ledger
//!
//! Every successful add and delete appends one line to an append-only
//! JSONL log, with a snapshot of the record involved.
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(id, &record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
