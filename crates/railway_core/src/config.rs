//! Runtime configuration read from the process environment.
//!
//! Recognized variables:
//! - `RAILWAY_LOG_LEVEL`: `trace|debug|info|warn|error`, defaults to
//!   `default_log_level()`.
//! - `RAILWAY_LOG_DIR`: absolute directory for rolling logs. Unset or blank
//!   leaves logging disabled.

use crate::logging::{default_log_level, init_logging, LogLevel};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "RAILWAY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "RAILWAY_LOG_DIR";

/// Snapshot of configuration values consumed by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: LogLevel,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// - `RAILWAY_LOG_LEVEL` is set to an unsupported level.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match non_blank(lookup(LOG_LEVEL_ENV)) {
            Some(value) => LogLevel::parse(value.as_str())?,
            None => default_log_level(),
        };
        let log_dir = non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from);

        Ok(Self {
            log_level,
            log_dir,
        })
    }

    /// Starts logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", log_dir.display()))?;
        init_logging(self.log_level.as_str(), log_dir)?;
        Ok(true)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
