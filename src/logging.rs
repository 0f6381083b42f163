//! File-based tracing setup. The terminal belongs to the TUI, so events are
//! never written to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::LogConfig;

/// Errors installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be opened.
    #[error("I/O error opening log file: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialized")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Builds a subscriber that appends events matching `config.filter` to
/// `config.path`, creating parent directories as needed.
pub fn build_subscriber(
    config: &LogConfig,
) -> Result<impl tracing::Subscriber + Send + Sync + use<>, LoggingError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    if let Some(parent) = config.path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish())
}

/// Installs the global subscriber when logging is configured.
#[mutants::skip]
pub fn init(config: Option<&LogConfig>) -> Result<(), LoggingError> {
    let Some(config) = config else {
        return Ok(());
    };
    tracing::subscriber::set_global_default(build_subscriber(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_land_in_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            filter: "info".into(),
            path: dir.path().join("nested").join("payform.log"),
        };
        let subscriber = build_subscriber(&config).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(reference = "DRY-1", "payment accepted");
            tracing::debug!("filtered out");
        });

        let contents = fs::read_to_string(&config.path).unwrap();
        assert!(contents.contains("payment accepted"));
        assert!(contents.contains("DRY-1"));
        assert!(!contents.contains("filtered out"));
    }

    #[test]
    fn bad_filter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            filter: "payform=notalevel".into(),
            path: dir.path().join("payform.log"),
        };
        assert!(matches!(
            build_subscriber(&config),
            Err(LoggingError::Filter(_))
        ));
    }
}
