//! Error handling for deptrec-store
//!
//! Wraps deptrec-core ExError with store-specific helpers

use deptrec_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
///
/// The SQLite message is kept verbatim.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a configuration error
pub fn config_error(err: config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(err.to_string())
}

/// Create an error for a commit mode string that names no mode
pub fn invalid_commit_mode(value: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("parse_commit_mode")
        .with_message(format!(
            "Unknown commit mode '{}' (expected 'autocommit' or 'explicit')",
            value
        ))
}
