//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a command handler can return to the session.
///
/// A missing contact is not an error here: handlers answer it with a
/// plain reply such as "Contact not found.".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Phone is not exactly ten digits
    #[error("Phone must be 10 digits, got: {0}")]
    InvalidPhoneFormat(String),

    /// Birthday does not parse as DD.MM.YYYY
    #[error("Invalid date format. Use DD.MM.YYYY, got: {0}")]
    InvalidDateFormat(String),

    /// Contact name is blank
    #[error("Contact name cannot be empty")]
    InvalidName,

    /// Too few arguments for the command
    #[error("Missing argument for '{command}'. Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => CommandError::InvalidName,
            ValidationError::InvalidPhone(phone) => CommandError::InvalidPhoneFormat(phone),
            ValidationError::InvalidDate(date) => CommandError::InvalidDateFormat(date),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid snapshot
    #[error("Corrupt address book data: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot was written by an unknown format version
    #[error("Unsupported address book format version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The book could not be saved on exit
    #[error("Failed to save address book: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
