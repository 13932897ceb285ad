//! Record identifiers
//!
//! Ids are plain integers handed out by the ledger store in increasing order.
//! The newtype keeps them from being confused with counts or amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The id given to the first record of an empty ledger
    pub const FIRST: RecordId = RecordId(1);

    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "#7" as printed in listings
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(RecordId::FIRST.next(), RecordId::new(2));
    }

    #[test]
    fn test_parse() {
        assert_eq!("12".parse::<RecordId>().unwrap(), RecordId::new(12));
        assert_eq!(" #3 ".parse::<RecordId>().unwrap(), RecordId::new(3));
        assert!("abc".parse::<RecordId>().is_err());
        assert!("-1".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&RecordId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
