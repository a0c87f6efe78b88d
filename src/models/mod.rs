//! Data models for directory entries.
//!
//! This module contains the `Contact` entity and the `ContactDraft` shape
//! adapters use to collect field values before a contact is built.

pub mod contact;

pub use contact::{Contact, ContactDraft, MAX_EMAILS, MAX_PHONES};
