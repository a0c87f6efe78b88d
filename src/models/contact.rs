//! Contact model representing one entry of the directory.

use crate::domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Maximum number of phone numbers a contact holds.
pub const MAX_PHONES: usize = 3;

/// Maximum number of email addresses a contact holds.
pub const MAX_EMAILS: usize = 3;

/// A named entry with up to three phone numbers and three email addresses.
///
/// Fields are stored exactly as given: unused slots may be present as empty
/// [`PhoneNumber`]/[`EmailAddress`] placeholders and nothing is padded or
/// trimmed. A contact with neither a name nor a surname can be built; such
/// contacts are only rejected where rows arrive from untrusted input.
///
/// Equality includes the [`ContactId`], so two contacts built from the same
/// field values are never equal. Use [`Contact::canonical_cmp`] for display
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    surname: String,
    phones: Vec<PhoneNumber>,
    emails: Vec<EmailAddress>,
}

impl Contact {
    /// Create a new contact with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooManyPhones` or `ValidationError::TooManyEmails`
    /// when more than three values are supplied for either list.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        phones: Vec<PhoneNumber>,
        emails: Vec<EmailAddress>,
    ) -> Result<Self, ValidationError> {
        if phones.len() > MAX_PHONES {
            return Err(ValidationError::TooManyPhones(phones.len()));
        }
        if emails.len() > MAX_EMAILS {
            return Err(ValidationError::TooManyEmails(emails.len()));
        }

        Ok(Self {
            id: ContactId::generate(),
            name: name.into(),
            surname: surname.into(),
            phones,
            emails,
        })
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn emails(&self) -> &[EmailAddress] {
        &self.emails
    }

    /// Whether at least one of name or surname has visible content.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty() || !self.surname.trim().is_empty()
    }

    /// Canonical order: surname first, then name, both case-insensitive.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.surname, &other.surname)
            .then_with(|| cmp_ignore_case(&self.name, &other.name))
    }

    /// Whether any field contains `needle`.
    ///
    /// `needle` must already be trimmed and lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        contains_lowercase(&self.name, needle)
            || contains_lowercase(&self.surname, needle)
            || self
                .phones
                .iter()
                .any(|p| contains_lowercase(p.as_str(), needle))
            || self
                .emails
                .iter()
                .any(|e| contains_lowercase(e.as_str(), needle))
    }

    pub(crate) fn set_id(&mut self, id: ContactId) {
        self.id = id;
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "Phones: [{}]", join(&self.phones))?;
        write!(f, "Emails: [{}]", join(&self.emails))
    }
}

/// Field values for a contact that has not been built yet.
///
/// Adapters fill this from user input and call [`ContactDraft::into_contact`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub surname: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

impl ContactDraft {
    /// Build a contact, keeping every value verbatim.
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        Contact::new(
            self.name,
            self.surname,
            self.phones.into_iter().map(PhoneNumber::from).collect(),
            self.emails.into_iter().map(EmailAddress::from).collect(),
        )
    }
}
