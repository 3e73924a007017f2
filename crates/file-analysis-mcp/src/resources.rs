// Rust guideline compliant 2026-10-19

//! Resource templates and `resources/read` handling.

use file_analysis::{read_file_resource, ResourceError, FILE_URI_TEMPLATE};
use rmcp::{
    model::{ReadResourceResult, ResourceContents, ResourceTemplate},
    ErrorData as McpError,
};
use serde_json::json;

/// Static description of one resource template the server answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub uri_template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

/// The `file://{file_path}` template.
pub const FILE_TEMPLATE: TemplateDescriptor = TemplateDescriptor {
    uri_template: FILE_URI_TEMPLATE,
    name: "file",
    description: "Access a file's text contents as a resource",
    mime_type: "text/plain",
};

impl TemplateDescriptor {
    /// Protocol model for `resources/templates/list`.
    pub fn to_model(&self) -> Result<ResourceTemplate, McpError> {
        serde_json::from_value(json!({
            "uriTemplate": self.uri_template,
            "name": self.name,
            "description": self.description,
            "mimeType": self.mime_type,
        }))
        .map_err(|e| {
            McpError::internal_error(format!("invalid resource template {}: {e}", self.name), None)
        })
    }
}

/// Read one resource.
///
/// File errors are returned as text contents, identical to the `read_file`
/// tool's message; only URIs outside `file://` are protocol errors.
pub fn read_resource_contents(uri: &str) -> Result<ReadResourceResult, McpError> {
    let text = match read_file_resource(uri) {
        Ok(content) => content,
        Err(ResourceError::UnsupportedUri { .. }) => {
            tracing::debug!(uri, "unsupported resource uri");
            return Err(McpError::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri, "expected": FILE_URI_TEMPLATE })),
            ));
        }
        Err(err) => err.to_string(),
    };
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}
