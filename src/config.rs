//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Environment variable holding the tracing filter; unset disables logging.
pub const LOG_FILTER_VAR: &str = "PAYFORM_LOG";
/// Environment variable overriding the log file location.
pub const LOG_FILE_VAR: &str = "PAYFORM_LOG_FILE";

/// Errors resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Logging was requested but the platform has no data directory.
    #[error("could not determine XDG data directory for the log file")]
    NoDataDir,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive, e.g. `debug` or `payform=trace`.
    pub filter: String,
    pub path: PathBuf,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// `None` when logging is disabled.
    pub log: Option<LogConfig>,
}

impl Config {
    /// Reads the configuration from process environment variables.
    #[mutants::skip]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::data_dir)
    }

    /// Builds the configuration from a variable lookup and a data directory
    /// resolver. Empty variables count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        data_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(filter) = non_empty(LOG_FILTER_VAR) else {
            return Ok(Self { log: None });
        };

        let path = match non_empty(LOG_FILE_VAR) {
            Some(path) => PathBuf::from(path),
            None => data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("payform")
                .join("payform.log"),
        };

        Ok(Self {
            log: Some(LogConfig { filter, path }),
        })
    }
}
