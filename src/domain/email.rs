//! EmailAddress value object.

use serde::{Serialize, Serializer};
use std::fmt;

/// An email address as entered by the user.
///
/// The text is stored without format validation. An empty address marks
/// an unused slot on a contact.
///
/// # Example
///
/// ```
/// use contact_directory::domain::EmailAddress;
///
/// let email = EmailAddress::new("anna@example.com");
/// assert_eq!(email.as_str(), "anna@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress. The text is kept verbatim.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// A placeholder for an unused email slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a placeholder slot.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for EmailAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EmailAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
