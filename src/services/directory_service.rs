//! Directory service layer.
//!
//! Validates adapter input, guards the directory with an async `RwLock` and
//! moves file I/O onto the blocking thread pool.

use crate::directory::Directory;
use crate::domain::ContactId;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Contact, ContactDraft};
use crate::storage::LoadReport;
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Directory operations offered to adapters.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Build a contact from user input and add it.
    ///
    /// Rejects drafts with neither a name nor a surname.
    async fn add_contact(&self, draft: ContactDraft) -> DirectoryResult<Contact>;

    /// Replace the fields of an existing contact, keeping its ID.
    async fn update_contact(&self, contact_id: &str, draft: ContactDraft)
        -> DirectoryResult<Contact>;

    /// Remove a contact. `Ok(None)` when nothing had that ID.
    async fn remove_contact(&self, contact_id: &str) -> DirectoryResult<Option<Contact>>;

    /// Substring search over names, phones and emails.
    async fn search_contacts(&self, query: &str) -> Vec<Contact>;

    /// Every contact in canonical order.
    async fn list_contacts(&self) -> Vec<Contact>;

    /// Save to `path`, or to the configured file. Returns the path written.
    async fn save(&self, path: Option<PathBuf>) -> DirectoryResult<PathBuf>;

    /// Load from `path`, or from the configured file.
    async fn load(&self, path: Option<PathBuf>) -> DirectoryResult<(PathBuf, LoadReport)>;
}

/// Default implementation of DirectoryService.
#[derive(Clone)]
pub struct DirectoryServiceImpl {
    directory: Arc<RwLock<Directory>>,
    default_path: Option<PathBuf>,
}

/// Validation helper functions.
impl DirectoryServiceImpl {
    /// Validate contact ID format.
    fn validate_contact_id(contact_id: &str) -> DirectoryResult<ContactId> {
        Ok(ContactId::new(contact_id)?)
    }

    /// Build a contact, requiring a name or a surname.
    fn validate_draft(draft: ContactDraft) -> DirectoryResult<Contact> {
        let contact = draft.into_contact()?;
        if !contact.has_name() {
            return Err(DirectoryError::InvalidArgument(
                "A contact needs a name or a surname".to_string(),
            ));
        }
        Ok(contact)
    }
}

impl DirectoryServiceImpl {
    /// Create a new directory service.
    ///
    /// # Arguments
    /// * `directory` - Initial directory contents
    /// * `default_path` - File used by `save`/`load` when no path is given
    pub fn new(directory: Directory, default_path: Option<PathBuf>) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            default_path,
        }
    }

    fn resolve_path(&self, path: Option<PathBuf>) -> DirectoryResult<PathBuf> {
        path.or_else(|| self.default_path.clone()).ok_or_else(|| {
            DirectoryError::InvalidArgument(
                "No file path given and CONTACTS_FILE is not set".to_string(),
            )
        })
    }
}

fn join_error(path: PathBuf, err: tokio::task::JoinError) -> DirectoryError {
    DirectoryError::io(
        path,
        io::Error::new(io::ErrorKind::Other, format!("Task join error: {}", err)),
    )
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn add_contact(&self, draft: ContactDraft) -> DirectoryResult<Contact> {
        let contact = Self::validate_draft(draft)?;

        let mut directory = self.directory.write().await;
        directory.add(contact.clone());
        tracing::info!(id = %contact.id(), "Contact added");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        contact_id: &str,
        draft: ContactDraft,
    ) -> DirectoryResult<Contact> {
        let id = Self::validate_contact_id(contact_id)?;
        let contact = Self::validate_draft(draft)?;

        let mut directory = self.directory.write().await;
        directory.replace(&id, contact)?;
        let updated = directory
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::ContactNotFound(id.to_string()))?;
        tracing::info!(%id, "Contact updated");
        Ok(updated)
    }

    async fn remove_contact(&self, contact_id: &str) -> DirectoryResult<Option<Contact>> {
        let id = Self::validate_contact_id(contact_id)?;

        let mut directory = self.directory.write().await;
        let removed = directory.remove_by_id(&id);
        if removed.is_none() {
            tracing::debug!(%id, "No contact to remove");
        }
        Ok(removed)
    }

    async fn search_contacts(&self, query: &str) -> Vec<Contact> {
        self.directory.read().await.search(query)
    }

    async fn list_contacts(&self) -> Vec<Contact> {
        self.directory.read().await.all()
    }

    async fn save(&self, path: Option<PathBuf>) -> DirectoryResult<PathBuf> {
        let path = self.resolve_path(path)?;
        let directory = Arc::clone(&self.directory);
        let target = path.clone();

        tokio::task::spawn_blocking(move || {
            let directory = directory.blocking_read();
            directory.save(&target)
        })
        .await
        .map_err(|e| join_error(path.clone(), e))??;

        Ok(path)
    }

    async fn load(&self, path: Option<PathBuf>) -> DirectoryResult<(PathBuf, LoadReport)> {
        let path = self.resolve_path(path)?;
        let directory = Arc::clone(&self.directory);
        let source = path.clone();

        let report = tokio::task::spawn_blocking(move || {
            let mut directory = directory.blocking_write();
            directory.load(&source)
        })
        .await
        .map_err(|e| join_error(path.clone(), e))??;

        Ok((path, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, surname: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            surname: surname.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_draft_requires_a_name() {
        assert!(matches!(
            DirectoryServiceImpl::validate_draft(draft(" ", "")),
            Err(DirectoryError::InvalidArgument(_))
        ));
        assert!(DirectoryServiceImpl::validate_draft(draft("", "Rossi")).is_ok());
    }

    #[test]
    fn test_validate_draft_bounds_lists() {
        let mut too_many = draft("Anna", "Bianchi");
        too_many.emails = vec!["a".to_string(); 4];
        assert!(matches!(
            DirectoryServiceImpl::validate_draft(too_many),
            Err(DirectoryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_contact_id() {
        assert!(DirectoryServiceImpl::validate_contact_id("").is_err());
        assert!(DirectoryServiceImpl::validate_contact_id("c1").is_ok());
    }

    #[tokio::test]
    async fn test_resolve_path_without_default() {
        let service = DirectoryServiceImpl::new(Directory::new(), None);
        assert!(matches!(
            service.save(None).await,
            Err(DirectoryError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.load(None).await,
            Err(DirectoryError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_unknown_contact_is_not_an_error() {
        let service = DirectoryServiceImpl::new(Directory::new(), None);
        assert!(service.remove_contact("c999999").await.unwrap().is_none());
    }
}
