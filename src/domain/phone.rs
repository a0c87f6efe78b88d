//! PhoneNumber value object.

use serde::{Serialize, Serializer};
use std::fmt;

/// A phone number as entered by the user.
///
/// No format validation is applied: digits, symbols and the empty string
/// are all accepted. An empty number marks an unused slot on a contact.
///
/// # Example
///
/// ```
/// use contact_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+39 081 555 1234");
/// assert_eq!(phone.as_str(), "+39 081 555 1234");
/// assert!(PhoneNumber::empty().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber. The text is kept verbatim.
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// A placeholder for an unused phone slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a placeholder slot.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PhoneNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PhoneNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
