//! Environment-driven configuration for hosts and the CLI probe.
//!
//! # Invariants
//! - Values are trimmed; empty values are treated as unset.
//! - Logging stays disabled unless a log directory is configured.

use crate::logging::{default_log_level, init_logging, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable selecting the log level.
pub const ENV_LOG_LEVEL: &str = "PRIMKIT_LOG_LEVEL";
/// Environment variable selecting the absolute log directory.
pub const ENV_LOG_DIR: &str = "PRIMKIT_LOG_DIR";

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: &'static str,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Reads `PRIMKIT_LOG_LEVEL` and `PRIMKIT_LOG_DIR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    ///
    /// # Errors
    /// - `InvalidLevel` when the level is not a known log level.
    /// - `RelativeLogDir` when the directory is not absolute.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let level = match read(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).map_err(|_| ConfigError::InvalidLevel(raw))?,
            None => default_log_level(),
        };

        let log_dir = match read(ENV_LOG_DIR) {
            Some(raw) => {
                let path = PathBuf::from(&raw);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativeLogDir(raw));
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self { level, log_dir })
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging is disabled by configuration.
    pub fn apply(&self) -> Result<bool, ConfigError> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        let dir = log_dir
            .to_str()
            .ok_or_else(|| ConfigError::LoggingInit("log_dir is not valid UTF-8".to_string()))?;
        init_logging(self.level, dir).map_err(ConfigError::LoggingInit)?;
        Ok(true)
    }
}

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLevel(String),
    RelativeLogDir(String),
    LoggingInit(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL}=`{value}` is not one of trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR}=`{value}` must be an absolute path")
            }
            Self::LoggingInit(message) => write!(f, "logging init failed: {message}"),
        }
    }
}

impl Error for ConfigError {}
