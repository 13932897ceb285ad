//! Record repository for JSON storage
//!
//! Manages reading and rewriting records.json. Every call goes back to the
//! file, so two repositories pointed at the same path see each other's
//! writes. Mutations hold a lock across read, modify and write.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Money, Record, RecordId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of records.json
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordData {
    /// Lowest id that has never been handed out
    #[serde(default = "first_id")]
    next_id: RecordId,

    #[serde(default)]
    records: Vec<Record>,
}

fn first_id() -> RecordId {
    RecordId::FIRST
}

impl Default for RecordData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            records: Vec::new(),
        }
    }
}

impl RecordData {
    /// Check the invariants a well-formed file must satisfy
    fn check(&self, path: &Path) -> Result<(), LedgerError> {
        let mut seen = HashSet::with_capacity(self.records.len());

        for record in &self.records {
            let id = record.id.ok_or_else(|| {
                LedgerError::Storage(format!(
                    "Corrupt data in {}: record without id",
                    path.display()
                ))
            })?;

            if !seen.insert(id) {
                return Err(LedgerError::Storage(format!(
                    "Corrupt data in {}: duplicate record id {}",
                    path.display(),
                    id
                )));
            }
        }

        Ok(())
    }

    /// Sum of every stored amount, `None` if it overflows
    fn total(&self) -> Option<Money> {
        Money::checked_sum(self.records.iter().map(|r| r.amount))
    }

    /// The id the next inserted record receives
    ///
    /// Normally `next_id`; a hand-edited file whose records run past it is
    /// still honoured so ids stay unique.
    fn allocate_id(&self) -> RecordId {
        self.records
            .iter()
            .filter_map(|r| r.id)
            .max()
            .map(|max| max.next())
            .map_or(self.next_id, |after_max| after_max.max(self.next_id))
    }
}

/// Repository for record persistence
pub struct RecordRepository {
    path: PathBuf,
    /// Per instance: repositories sharing a path do not share this lock
    write_lock: Mutex<()>,
}

impl RecordRepository {
    /// Create a new record repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, LedgerError> {
        self.write_lock
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn load(&self) -> Result<RecordData, LedgerError> {
        let data: RecordData = read_json(&self.path)?;
        data.check(&self.path)?;
        Ok(data)
    }

    /// Get all records in ascending id order
    pub fn get_all(&self) -> Result<Vec<Record>, LedgerError> {
        let mut records = self.load()?.records;
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Result<Option<Record>, LedgerError> {
        Ok(self
            .load()?
            .records
            .into_iter()
            .find(|r| r.id == Some(id)))
    }

    /// Assign the next id to `record`, append it and rewrite the file
    ///
    /// Nothing is written if the file cannot be read back first, or if the
    /// new amount would push the ledger total past what [`Money`] can hold.
    /// Any subset of records then sums without overflow too, since amounts
    /// are positive.
    pub fn insert(&self, record: Record) -> Result<Record, LedgerError> {
        let _guard = self.lock()?;
        let mut data = self.load()?;

        if data
            .total()
            .and_then(|total| total.checked_add(record.amount))
            .is_none()
        {
            return Err(LedgerError::Validation(format!(
                "Amount {} would make the ledger total too large to represent",
                record.amount
            )));
        }

        let id = data.allocate_id();
        let record = record.with_id(id);

        data.records.push(record.clone());
        data.next_id = id.next();

        write_json_atomic(&self.path, &data)?;
        Ok(record)
    }

    /// Remove a record and rewrite the file
    ///
    /// Returns the removed record, or `None` (without touching the file) if
    /// no record has that id.
    pub fn delete(&self, id: RecordId) -> Result<Option<Record>, LedgerError> {
        let _guard = self.lock()?;
        let mut data = self.load()?;

        let Some(index) = data.records.iter().position(|r| r.id == Some(id)) else {
            return Ok(None);
        };

        let removed = data.records.remove(index);
        write_json_atomic(&self.path, &data)?;
        Ok(Some(removed))
    }

}
