//! Ledger store
//!
//! Owns the durable record collection: validation and id assignment on add,
//! delete by id, and the read-only totals the summary screens are built
//! from.
//!
//! `add` and `delete` answer with a plain `bool` so a UI can show
//! "saved"/"failed" without handling errors; the `try_` variants return the
//! underlying [`LedgerError`] for callers that want the reason.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Record, RecordId};
use crate::storage::RecordRepository;

/// The expense ledger
pub struct LedgerStore {
    records: RecordRepository,
    categories: Vec<String>,
    audit: Option<AuditLogger>,
}

impl LedgerStore {
    /// Create a store over `records_path` accepting the given categories
    pub fn new<I, S>(records_path: PathBuf, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: RecordRepository::new(records_path),
            categories: categories.into_iter().map(Into::into).collect(),
            audit: None,
        }
    }

    /// Open the store at its standard location, with audit logging enabled
    pub fn open(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self::new(paths.records_file(), settings.categories.iter().cloned())
            .with_audit_log(AuditLogger::new(paths.audit_log())))
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The category labels new records may use
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Check a candidate against the rules every persisted record obeys
    pub fn validate(&self, candidate: &Record) -> LedgerResult<()> {
        if let Some(id) = candidate.id {
            return Err(LedgerError::Validation(format!(
                "Record already has id {}",
                id
            )));
        }

        if candidate.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Description cannot be empty".into(),
            ));
        }

        if !candidate.amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Amount must be greater than zero, got {}",
                candidate.amount
            )));
        }

        if !self.categories.iter().any(|c| *c == candidate.category) {
            return Err(LedgerError::Validation(format!(
                "Unknown category '{}'. Expected one of: {}",
                candidate.category,
                self.categories.join(", ")
            )));
        }

        Ok(())
    }

    /// Validate, assign an id and persist a candidate record
    pub fn try_add(&self, candidate: Record) -> LedgerResult<Record> {
        self.validate(&candidate)?;

        let record = self.records.insert(candidate)?;
        let id = record.id.ok_or_else(|| {
            LedgerError::Storage("Inserted record came back without an id".into())
        })?;

        tracing::debug!(%id, category = %record.category, amount = %record.amount, "record added");
        self.audit(AuditEntry::create(id, &record));

        Ok(record)
    }

    /// Add a candidate record; `false` means nothing was saved
    pub fn add(&self, candidate: Record) -> bool {
        match self.try_add(candidate) {
            Ok(_) => true,
            Err(e) if e.is_persistence() => {
                tracing::error!(error = %e, "failed to save record");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "record rejected");
                false
            }
        }
    }

    /// All records in insertion (ascending id) order
    pub fn list(&self) -> LedgerResult<Vec<Record>> {
        self.records.get_all()
    }

    /// Look up a single record
    pub fn get(&self, id: RecordId) -> LedgerResult<Option<Record>> {
        self.records.get(id)
    }

    /// Delete a record, returning it
    pub fn try_delete(&self, id: RecordId) -> LedgerResult<Record> {
        let removed = self
            .records
            .delete(id)?
            .ok_or_else(|| LedgerError::record_not_found(id.to_string()))?;

        tracing::debug!(%id, "record deleted");
        self.audit(AuditEntry::delete(id, &removed));

        Ok(removed)
    }

    /// Delete a record; `false` if it did not exist or could not be removed
    pub fn delete(&self, id: RecordId) -> bool {
        match self.try_delete(id) {
            Ok(_) => true,
            Err(e) if e.is_not_found() => {
                tracing::debug!(%id, "nothing to delete");
                false
            }
            Err(e) if e.is_persistence() => {
                tracing::error!(%id, error = %e, "failed to delete record");
                false
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "record not deleted");
                false
            }
        }
    }

    /// Sum of all amounts, or of those dated exactly `date`
    pub fn total_expenditure(&self, date: Option<NaiveDate>) -> LedgerResult<Money> {
        let records = self.list()?;
        Money::checked_sum(matching(&records, date).map(|r| r.amount))
            .ok_or_else(LedgerError::total_overflow)
    }

    /// Amounts summed per category, over all records or those dated `date`
    ///
    /// Categories without matching records are absent from the map.
    pub fn expenditure_by_category(
        &self,
        date: Option<NaiveDate>,
    ) -> LedgerResult<HashMap<String, Money>> {
        let records = self.list()?;

        let mut totals: HashMap<String, Money> = HashMap::new();
        for record in matching(&records, date) {
            let total = totals.entry(record.category.clone()).or_default();
            *total = total
                .checked_add(record.amount)
                .ok_or_else(LedgerError::total_overflow)?;
        }

        Ok(totals)
    }

    fn audit(&self, entry: AuditEntry) {
        // The record is already persisted; a lost audit line must not undo that
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, record_id = %entry.record_id, "failed to write audit entry");
            }
        }
    }
}

/// Records on `date`, or all records when no date is given
pub(crate) fn matching(
    records: &[Record],
    date: Option<NaiveDate>,
) -> impl Iterator<Item = &Record> {
    records
        .iter()
        .filter(move |r| date.map_or(true, |d| r.date == d))
}
