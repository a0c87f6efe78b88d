//! Contact Directory - Main entry point
//!
//! Serves the contact directory over the Model Context Protocol on stdio.

use anyhow::Result;
use contact_directory::{Config, ContactDirectoryServer, Directory, DirectoryServiceImpl};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr only; stdout carries MCP traffic
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let directory = initial_directory(&config);
    info!("Starting with {} contacts", directory.len());

    let service = Arc::new(DirectoryServiceImpl::new(directory, config.contacts_file.clone()));
    let server = ContactDirectoryServer::new(service);

    info!("Starting MCP server with stdio transport");
    contact_directory::server::run_server(server).await?;

    info!("Contact directory shutdown complete");
    Ok(())
}

/// Load the configured contacts file, if autoload is on and the file exists.
///
/// Load failures are logged and leave the directory empty.
fn initial_directory(config: &Config) -> Directory {
    let mut directory = Directory::new();

    let Some(path) = config.contacts_file.as_ref().filter(|_| config.autoload) else {
        return directory;
    };

    if !path.exists() {
        info!("Contacts file {} does not exist yet", path.display());
        return directory;
    }

    match directory.load(path) {
        Ok(report) if !report.skipped.is_empty() => {
            warn!(
                "Loaded {} contacts from {}, skipped {} rows",
                report.accepted,
                path.display(),
                report.skipped.len()
            );
        }
        Ok(_) => {}
        Err(e) => warn!("Could not load contacts file: {}", e),
    }

    directory
}
