//! Path management for daily-allowance
//!
//! ## Path Resolution Order
//!
//! 1. `DAILY_ALLOWANCE_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/daily-allowance` on
//!    Linux, `%APPDATA%\daily-allowance` on Windows, ...)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::AllowanceError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "DAILY_ALLOWANCE_DIR";

const APP_DIR_NAME: &str = "daily-allowance";

/// Manages all paths used by daily-allowance
#[derive(Debug, Clone)]
pub struct AllowancePaths {
    base_dir: PathBuf,
}

impl AllowancePaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AllowanceError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => BaseDirs::new()
                .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
                .ok_or_else(|| {
                    AllowanceError::Config("Could not determine the home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AllowanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AllowanceError::Io(format!("Failed to create base directory: {}", e)))
    }
}
