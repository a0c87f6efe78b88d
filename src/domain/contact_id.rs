//! ContactId value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a contact held by a [`Directory`](crate::Directory).
///
/// Every [`Contact`](crate::Contact) receives a fresh ID when it is built,
/// so two contacts with identical fields are still distinct entries.
/// Clones share the ID of the contact they were cloned from.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactId;
///
/// let id = ContactId::new("c42").unwrap();
/// assert_eq!(id.as_str(), "c42");
/// assert_ne!(ContactId::generate(), ContactId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Wrap an existing ID, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Allocate a process-unique ID.
    pub fn generate() -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("c{}", n))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
