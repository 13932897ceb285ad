//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Record, RecordId};

/// Ledger mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A record was added
    Create,
    /// A record was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Creates carry the record in `after`; deletes carry it in `before`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Id of the affected record
    pub record_id: RecordId,

    /// Record description, for reading the log without the snapshots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a freshly persisted record
    pub fn create(record_id: RecordId, record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            record_id,
            description: Some(record.description.clone()),
            before: None,
            after: serde_json::to_value(record).ok(),
        }
    }

    /// Entry for a removed record
    pub fn delete(record_id: RecordId, record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            record_id,
            description: Some(record.description.clone()),
            before: serde_json::to_value(record).ok(),
            after: None,
        }
    }

    /// One-line human readable form
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {} Record #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.record_id
        );

        if let Some(description) = &self.description {
            line.push_str(&format!(" ({})", description));
        }

        line
    }
}
