//! Error types for reminder computation

use thiserror::Error;

/// Errors raised while reading dates or reminder settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    /// A stored date is not `YYYY-MM-DD` or `--MM-DD`
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
