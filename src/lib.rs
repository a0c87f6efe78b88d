//! Contact Directory - a personal address book with CSV persistence.
//!
//! The core keeps contacts (name, surname, up to three phone numbers and
//! three email addresses) in an always-sorted [`Directory`] that can be
//! searched and written to or read from a comma-delimited file. A thin MCP
//! server exposes the same operations to AI assistants.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact IDs, phone numbers and emails
//! - **models**: The `Contact` entity and its ordering
//! - **directory**: The owning, sorted contact collection
//! - **storage**: Delimited-file encoding and decoding
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **services**: Serialized async access for adapters
//! - **server**: MCP protocol server
//!
//! # Example
//!
//! ```
//! use contact_directory::{Contact, Directory, PhoneNumber};
//!
//! let mut directory = Directory::new();
//! directory.add(Contact::new("Mario", "Rossi", vec![PhoneNumber::new("081 555")], vec![]).unwrap());
//! directory.add(Contact::new("anna", "bianchi", vec![], vec![]).unwrap());
//!
//! let surnames: Vec<_> = directory.iter().map(Contact::surname).collect();
//! assert_eq!(surnames, ["bianchi", "Rossi"]);
//! assert_eq!(directory.search("555").len(), 1);
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;

pub use config::Config;
pub use directory::Directory;
pub use domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult, RowParseError};
pub use models::{Contact, ContactDraft};
pub use server::ContactDirectoryServer;
pub use services::{DirectoryService, DirectoryServiceImpl};
pub use storage::{LoadReport, RowDiagnostic};
