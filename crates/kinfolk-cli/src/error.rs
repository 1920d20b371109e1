//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error(transparent)]
    Store(#[from] kinfolk_store::StoreError),

    /// Snapshot file could not be read
    #[error(transparent)]
    Snapshot(#[from] kinfolk_store::SnapshotError),

    /// A change would break a domain rule
    #[error(transparent)]
    Domain(#[from] kinfolk_domain::DomainError),

    /// Reminder settings or dates were rejected
    #[error(transparent)]
    Reminder(#[from] kinfolk_reminders::ReminderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No contact with the given id
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}
