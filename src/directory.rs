//! The contact directory: an owned, always-sorted collection of contacts.
//!
//! All operations are synchronous. A `Directory` is not shared between
//! threads by itself; callers that need concurrent access wrap it the way
//! [`DirectoryServiceImpl`](crate::services::DirectoryServiceImpl) does.

use crate::domain::ContactId;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use crate::storage::{self, LoadReport};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// An address book holding contacts in canonical order.
///
/// The collection is re-sorted (stably) after every add, replace and load,
/// so iteration always yields contacts by surname and then name, ignoring
/// case.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over the contacts in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Look up a contact by identity.
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Insert a contact and restore canonical order.
    ///
    /// Contacts comparing equal keep their insertion order.
    pub fn add(&mut self, contact: Contact) {
        debug!(id = %contact.id(), "Adding contact");
        self.contacts.push(contact);
        self.sort();
    }

    /// Remove the contact with the same identity as `contact`.
    ///
    /// Does nothing when no such contact is held.
    pub fn remove(&mut self, contact: &Contact) -> Option<Contact> {
        self.remove_by_id(contact.id())
    }

    /// Remove the contact with the given ID, returning it if it was held.
    pub fn remove_by_id(&mut self, id: &ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id() == id)?;
        debug!(%id, "Removing contact");
        Some(self.contacts.remove(index))
    }

    /// Swap the contact with ID `id` for `contact`, which takes over that ID.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::ContactNotFound` if no contact has that ID.
    pub fn replace(&mut self, id: &ContactId, mut contact: Contact) -> DirectoryResult<Contact> {
        let slot = self
            .contacts
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| DirectoryError::ContactNotFound(id.to_string()))?;

        contact.set_id(id.clone());
        let previous = std::mem::replace(slot, contact);
        debug!(%id, "Replaced contact");
        self.sort();
        Ok(previous)
    }

    /// Contacts with a name, surname, phone or email containing `query`.
    ///
    /// Matching ignores case and surrounding whitespace in `query`. A blank
    /// query returns every contact. Results keep canonical order.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all();
        }

        self.contacts
            .iter()
            .filter(|c| c.matches(&needle))
            .cloned()
            .collect()
    }

    /// A copy of every contact in canonical order.
    pub fn all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Write the whole directory to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::InvalidArgument` if `path` is empty
    /// - `DirectoryError::Io` if the file cannot be created or written; a
    ///   failure mid-write may leave a truncated file behind
    pub fn save(&self, path: impl AsRef<Path>) -> DirectoryResult<()> {
        let path = path.as_ref();
        ensure_path(path)?;

        let file = File::create(path).map_err(|e| DirectoryError::io(path, e))?;
        storage::write_contacts(file, &self.contacts).map_err(|e| DirectoryError::io(path, e))?;

        info!(path = %path.display(), count = self.contacts.len(), "Directory saved");
        Ok(())
    }

    /// Replace the directory's contents with the rows of the file at `path`.
    ///
    /// The current contacts are discarded before the file is opened. Rows
    /// without a name and surname, or that cannot be decoded, are skipped and
    /// listed in the returned report.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::InvalidArgument` if `path` is empty
    /// - `DirectoryError::Io` if the file cannot be opened or read; the
    ///   directory is left empty
    pub fn load(&mut self, path: impl AsRef<Path>) -> DirectoryResult<LoadReport> {
        let path = path.as_ref();
        ensure_path(path)?;

        self.contacts.clear();

        let file = File::open(path).map_err(|e| DirectoryError::io(path, e))?;
        let parsed = storage::read_contacts(file).map_err(|e| DirectoryError::io(path, e))?;

        self.contacts = parsed.contacts;
        self.sort();

        let report = LoadReport {
            accepted: self.contacts.len(),
            skipped: parsed.skipped,
        };
        info!(
            path = %path.display(),
            accepted = report.accepted,
            skipped = report.skipped.len(),
            "Directory loaded"
        );
        Ok(report)
    }

    fn sort(&mut self) {
        self.contacts.sort_by(Contact::canonical_cmp);
    }
}

fn ensure_path(path: &Path) -> DirectoryResult<()> {
    if path.as_os_str().is_empty() {
        return Err(DirectoryError::InvalidArgument(
            "file path must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, PhoneNumber};

    fn contact(name: &str, surname: &str) -> Contact {
        Contact::new(name, surname, vec![], vec![]).unwrap()
    }

    fn names(contacts: &[Contact]) -> Vec<(&str, &str)> {
        contacts.iter().map(|c| (c.surname(), c.name())).collect()
    }

    #[test]
    fn test_add_keeps_canonical_order() {
        let mut dir = Directory::new();
        dir.add(contact("Mario", "Rossi"));
        dir.add(contact("anna", "bianchi"));

        assert_eq!(names(&dir.all()), vec![("bianchi", "anna"), ("Rossi", "Mario")]);
    }

    #[test]
    fn test_add_is_stable_for_equal_keys() {
        let mut dir = Directory::new();
        let first = contact("Anna", "Rossi");
        let second = contact("ANNA", "ROSSI");
        dir.add(first.clone());
        dir.add(second.clone());

        let all = dir.all();
        assert_eq!(all[0].id(), first.id());
        assert_eq!(all[1].id(), second.id());
    }

    #[test]
    fn test_remove_by_identity_only() {
        let mut dir = Directory::new();
        let kept = contact("Anna", "Bianchi");
        let twin = contact("Anna", "Bianchi");
        dir.add(kept.clone());

        assert!(dir.remove(&twin).is_none());
        assert_eq!(dir.len(), 1);

        assert_eq!(dir.remove(&kept), Some(kept));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_remove_from_empty_directory_is_noop() {
        let mut dir = Directory::new();
        assert!(dir.remove(&contact("a", "b")).is_none());
        assert!(dir.is_empty());
    }

    #[test]
    fn test_replace_adopts_id_and_resorts() {
        let mut dir = Directory::new();
        let anna = contact("Anna", "Bianchi");
        dir.add(anna.clone());
        dir.add(contact("Mario", "Rossi"));

        let previous = dir.replace(anna.id(), contact("Anna", "Verdi")).unwrap();
        assert_eq!(previous, anna);

        let all = dir.all();
        assert_eq!(names(&all), vec![("Rossi", "Mario"), ("Verdi", "Anna")]);
        assert_eq!(all[1].id(), anna.id());
        assert!(dir.get(anna.id()).is_some());
    }

    #[test]
    fn test_replace_missing_contact() {
        let mut dir = Directory::new();
        let result = dir.replace(&ContactId::generate(), contact("a", "b"));
        assert!(matches!(result, Err(DirectoryError::ContactNotFound(_))));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_search_blank_query_returns_everything() {
        let mut dir = Directory::new();
        dir.add(contact("Mario", "Rossi"));
        dir.add(contact("Anna", "Bianchi"));

        assert_eq!(dir.search(""), dir.all());
        assert_eq!(dir.search("   "), dir.all());
    }

    #[test]
    fn test_search_matches_phones_and_emails() {
        let mut dir = Directory::new();
        dir.add(
            Contact::new(
                "Mario",
                "Rossi",
                vec![PhoneNumber::new("081 555")],
                vec![EmailAddress::new("MR@Example.org")],
            )
            .unwrap(),
        );
        dir.add(contact("Anna", "Bianchi"));

        assert_eq!(dir.search("  555 ").len(), 1);
        assert_eq!(dir.search("example.ORG").len(), 1);
        assert_eq!(dir.search("AN").len(), 1);
        assert!(dir.search("zzz").is_empty());
    }

    #[test]
    fn test_all_is_a_copy() {
        let mut dir = Directory::new();
        dir.add(contact("Anna", "Bianchi"));

        let mut copy = dir.all();
        copy.clear();
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_save_and_load_reject_empty_path() {
        let mut dir = Directory::new();
        assert!(matches!(dir.save(""), Err(DirectoryError::InvalidArgument(_))));
        assert!(matches!(dir.load(""), Err(DirectoryError::InvalidArgument(_))));
    }

    #[test]
    fn test_iter_follows_canonical_order() {
        let mut dir = Directory::new();
        dir.add(contact("b", "z"));
        dir.add(contact("a", "z"));
        dir.add(contact("c", "a"));

        let order: Vec<&str> = (&dir).into_iter().map(Contact::name).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(dir.iter().count(), 3);
    }
}
