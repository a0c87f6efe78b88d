//! Domain validation errors.

use std::fmt;

/// Errors that can occur while building domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// More phone numbers were supplied than a contact can hold.
    TooManyPhones(usize),

    /// More email addresses were supplied than a contact can hold.
    TooManyEmails(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::TooManyPhones(count) => {
                write!(f, "A contact holds at most 3 phone numbers, got {}", count)
            }
            Self::TooManyEmails(count) => {
                write!(f, "A contact holds at most 3 email addresses, got {}", count)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
