//! Error types

use std::io;
use std::path::PathBuf;

/// Logger failures
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file could not be opened. Treat as a fatal startup error.
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The sink was already released by an earlier `close`
    #[error("log file already closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load config {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("missing required config key '{0}'")]
    MissingKey(&'static str),

    #[error("invalid value '{value}' for config key '{key}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
