//! User settings for the expense ledger
//!
//! Holds the configured expense categories and display preferences.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Category labels offered when no configuration file exists yet
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Makanan",
    "Transport",
    "Belanja",
    "Tagihan",
    "Hiburan",
    "Kesehatan",
    "Lainnya",
];

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expense categories, in the order they are offered to the user
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_currency() -> String {
    "Rp".to_string()
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject category lists the ledger cannot work with
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.categories.is_empty() {
            return Err(LedgerError::Config(
                "At least one expense category must be configured".into(),
            ));
        }

        if let Some(blank) = self.categories.iter().find(|c| c.trim().is_empty()) {
            return Err(LedgerError::Config(format!(
                "Category labels cannot be blank: {:?}",
                blank
            )));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(LedgerError::Config(format!(
                "Invalid date format: {:?}",
                self.date_format
            )));
        }

        Ok(())
    }

    /// The first configured category, used when the user does not pick one
    pub fn default_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}
