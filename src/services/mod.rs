//! Application service layer.
//!
//! Services own the shared [`Directory`](crate::Directory) and serialize
//! access to it. They are the boundary between adapters such as the MCP
//! handlers and the synchronous core.

mod directory_service;

pub use directory_service::{DirectoryService, DirectoryServiceImpl};
