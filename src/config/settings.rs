//! User settings for budgetbook
//!
//! Manages client preferences: where the budget API lives, how amounts and
//! dates are shown, and how long fetched todo lists stay fresh.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::paths::BudgetbookPaths;
use crate::error::BudgetbookError;

/// User settings for budgetbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the budget API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Minutes a fetched todo list is served from cache before refetching
    #[serde(default = "default_todo_stale_minutes")]
    pub todo_stale_minutes: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_todo_stale_minutes() -> u32 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            todo_stale_minutes: default_todo_stale_minutes(),
        }
    }
}

impl Settings {
    /// Staleness window for todo list queries
    pub fn todo_stale_after(&self) -> Duration {
        Duration::minutes(i64::from(self.todo_stale_minutes))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetbookPaths) -> Result<Self, BudgetbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetbookPaths) -> Result<(), BudgetbookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BudgetbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
