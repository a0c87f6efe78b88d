//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`Directory`](crate::Directory) operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A required value was missing or out of bounds
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing file could not be opened, read, or written
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No contact with the given ID is held by the directory
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

impl DirectoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ValidationError> for DirectoryError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Why a single row was skipped during a load. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    /// Both name and surname were blank
    #[error("row has neither a name nor a surname")]
    MissingName,

    /// The row could not be split into fields
    #[error("malformed row: {0}")]
    Malformed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
