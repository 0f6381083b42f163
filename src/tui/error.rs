use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can stop the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The environment configuration could not be resolved.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
