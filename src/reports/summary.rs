//! Expenditure summary
//!
//! Spending for one day or for all time, broken down by category with each
//! category's share of the total.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::ledger::{matching, LedgerStore};

/// Spending in a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub record_count: usize,
    /// Share of the summary total, 0-100
    pub percentage: f64,
}

/// Expenditure summary
#[derive(Debug, Clone)]
pub struct ExpenditureSummary {
    /// Day the summary is restricted to; `None` for all time
    pub date: Option<NaiveDate>,
    pub total: Money,
    pub record_count: usize,
    /// Largest spending first
    pub categories: Vec<CategorySpending>,
}

impl ExpenditureSummary {
    /// Summarise the ledger, optionally for a single day
    pub fn generate(store: &LedgerStore, date: Option<NaiveDate>) -> LedgerResult<Self> {
        // One snapshot so the total and the breakdown describe the same records
        let records = store.list()?;

        let mut per_category: HashMap<&str, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();
        let mut record_count = 0;

        for record in matching(&records, date) {
            let entry = per_category
                .entry(record.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 = (entry.0)
                .checked_add(record.amount)
                .ok_or_else(LedgerError::total_overflow)?;
            entry.1 += 1;
            total = total
                .checked_add(record.amount)
                .ok_or_else(LedgerError::total_overflow)?;
            record_count += 1;
        }

        let mut categories: Vec<CategorySpending> = per_category
            .into_iter()
            .map(|(category, (amount, count))| CategorySpending {
                category: category.to_string(),
                total: amount,
                record_count: count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(Self {
            date,
            total,
            record_count,
            categories,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Spending for one category, if any was recorded
    pub fn category(&self, name: &str) -> Option<&CategorySpending> {
        self.categories.iter().find(|c| c.category == name)
    }
}
