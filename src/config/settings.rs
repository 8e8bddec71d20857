//! User settings for daily-allowance
//!
//! Display preferences, the input date format, the expenditure policy and
//! logging options.

use serde::{Deserialize, Serialize};

use super::paths::AllowancePaths;
use crate::error::AllowanceError;
use crate::models::SpendPolicy;

/// User settings for daily-allowance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display and accepted on input
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Deadline input format (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// What an expenditure is checked against
    #[serde(default)]
    pub spend_policy: SpendPolicy,

    /// Whether session operations are appended to the audit log file
    #[serde(default)]
    pub audit_log_enabled: bool,

    /// Audit entries kept in memory for the `history` command
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Default tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_history_limit() -> usize {
    crate::session::DEFAULT_HISTORY_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            spend_policy: SpendPolicy::default(),
            audit_log_enabled: false,
            history_limit: default_history_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AllowancePaths) -> Result<Self, AllowanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AllowanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                AllowanceError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AllowancePaths) -> Result<(), AllowanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AllowanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AllowanceError::Io(format!("Failed to write settings file: {}", e)))
    }
}
