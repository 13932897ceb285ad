//! Expense record model
//!
//! A record is one spending event. Callers build a candidate with
//! [`Record::new`]; the ledger store validates it and assigns the id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::money::Money;

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Assigned by the store on insertion; `None` for candidates
    pub id: Option<RecordId>,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (positive once persisted)
    pub amount: Money,

    /// Category label from the configured set
    pub category: String,

    /// Day of the expense
    pub date: NaiveDate,
}

impl Record {
    /// Create a candidate record with no id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    pub(crate) fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_candidate() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let record = Record::new("Makan siang", Money::from_units(25_000), "Makanan", date);

        assert_eq!(record.id, None);
        assert_eq!(record.description, "Makan siang");
        assert_eq!(record.category, "Makanan");
    }

    #[test]
    fn test_construction_does_not_validate() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let record = Record::new("", Money::from_units(-5), "Nowhere", date);
        assert!(record.amount.is_negative());
    }

    #[test]
    fn test_serialized_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let record = Record::new("Bensin", Money::from_units(50_000), "Transport", date)
            .with_id(RecordId::new(2));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["date"], "2024-01-10");
        assert_eq!(value["amount"], 5_000_000);
    }
}
