//! Domain value objects and types.
//!
//! Type-safe wrappers for the identity of a contact and for the phone
//! numbers and email addresses it carries. Phone and email values are
//! stored verbatim; only contact IDs are validated.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
