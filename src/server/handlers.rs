//! MCP tool handlers for the contact directory.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::DirectoryError;
use crate::models::{Contact, ContactDraft};
use crate::services::DirectoryService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// The MCP server that exposes the contact directory as tools.
#[derive(Clone)]
pub struct ContactDirectoryServer {
    directory_service: Arc<dyn DirectoryService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactDirectoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-directory".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Personal contact directory - add, edit, remove and search contacts (name, surname, up to three phone numbers and three email addresses) and save or load them as a CSV file.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ContactFieldsParams {
    #[serde(default)]
    name: String,
    #[serde(default)]
    surname: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    emails: Vec<String>,
}

impl From<ContactFieldsParams> for ContactDraft {
    fn from(params: ContactFieldsParams) -> Self {
        ContactDraft {
            name: params.name,
            surname: params.surname,
            phones: params.phones,
            emails: params.emails,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactParams {
    contact_id: String,
    #[serde(flatten)]
    fields: ContactFieldsParams,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FileParams {
    #[serde(default)]
    path: Option<String>,
}

impl FileParams {
    fn into_path(self) -> Option<PathBuf> {
        self.path.map(PathBuf::from)
    }
}

/// Map directory errors onto MCP error codes.
fn to_mcp_error(e: DirectoryError) -> McpError {
    let code = match e {
        DirectoryError::InvalidArgument(_) | DirectoryError::ContactNotFound(_) => {
            ErrorCode::INVALID_PARAMS
        }
        DirectoryError::Io { .. } => ErrorCode::INTERNAL_ERROR,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn contacts_json(contacts: &[Contact]) -> serde_json::Value {
    serde_json::json!({
        "count": contacts.len(),
        "contacts": contacts,
    })
}

// Tool router implementation
#[tool_router]
impl ContactDirectoryServer {
    /// Create a new contact directory server.
    pub fn new(directory_service: Arc<dyn DirectoryService>) -> Self {
        Self {
            directory_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Add a new contact to the directory.
    #[tool(
        description = "Add a contact. Requires a name or a surname; accepts up to three phone numbers and three email addresses. Returns the stored contact with its id."
    )]
    async fn add_contact(
        &self,
        params: Parameters<ContactFieldsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!(
            "add_contact: phones={}, emails={}",
            params.phones.len(),
            params.emails.len()
        );

        let contact = self
            .directory_service
            .add_contact(params.into())
            .await
            .map_err(|e| {
                tracing::error!("Failed to add contact: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({ "contact": contact }))
    }

    /// Replace the fields of an existing contact.
    #[tool(
        description = "Replace the name, surname, phone numbers and email addresses of the contact with the given id. The id is kept."
    )]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!("update_contact: contact_id={}", params.contact_id);

        let contact = self
            .directory_service
            .update_contact(&params.contact_id, params.fields.into())
            .await
            .map_err(|e| {
                tracing::error!("Failed to update contact: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({ "contact": contact }))
    }

    /// Remove a contact by id.
    #[tool(description = "Remove the contact with the given id. Removing an unknown id does nothing.")]
    async fn remove_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let removed = self
            .directory_service
            .remove_contact(&params.contact_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "contact_id": params.contact_id,
            "removed": removed.is_some(),
            "contact": removed,
        }))
    }

    /// Search contacts by substring.
    #[tool(
        description = "Case-insensitive substring search over name, surname, phone numbers and email addresses. An empty query lists every contact. Results are ordered by surname, then name."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let results = self
            .directory_service
            .search_contacts(&params.query)
            .await;

        let mut response = contacts_json(&results);
        response["query"] = serde_json::Value::String(params.query);
        json_result(&response)
    }

    /// List every contact.
    #[tool(description = "List every contact, ordered by surname, then name")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let contacts = self.directory_service.list_contacts().await;
        json_result(&contacts_json(&contacts))
    }

    /// Save the directory to a CSV file.
    #[tool(
        description = "Save every contact to a CSV file, overwriting it. Uses the configured contacts file when no path is given."
    )]
    async fn save_contacts(
        &self,
        params: Parameters<FileParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = self
            .directory_service
            .save(params.0.into_path())
            .await
            .map_err(|e| {
                tracing::error!("Failed to save contacts: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({
            "path": path.display().to_string(),
            "saved": true,
        }))
    }

    /// Load the directory from a CSV file.
    #[tool(
        description = "Replace every contact with the rows of a CSV file. Rows without a name and surname, or that cannot be read, are skipped and reported. Uses the configured contacts file when no path is given."
    )]
    async fn load_contacts(
        &self,
        params: Parameters<FileParams>,
    ) -> Result<CallToolResult, McpError> {
        let (path, report) = self
            .directory_service
            .load(params.0.into_path())
            .await
            .map_err(|e| {
                tracing::error!("Failed to load contacts: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({
            "path": path.display().to_string(),
            "accepted": report.accepted,
            "skipped": report.skipped.iter().map(|d| {
                serde_json::json!({
                    "line": d.line,
                    "reason": d.reason.to_string(),
                })
            }).collect::<Vec<_>>(),
        }))
    }
}
