//! MCP server implementation for the contact directory.
//!
//! This module exposes the directory operations to AI assistants through
//! the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactDirectoryServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact directory server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
///
/// # Arguments
/// * `server` - The configured ContactDirectoryServer instance
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: ContactDirectoryServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
