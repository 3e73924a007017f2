// Rust guideline compliant 2026-10-19

//! `file://{file_path}` resources, served through [`read_file`].

use thiserror::Error;

use crate::files::{read_file, FileError};

/// Scheme prefix of file resources.
pub const FILE_URI_SCHEME: &str = "file://";

/// URI template advertised to MCP clients.
pub const FILE_URI_TEMPLATE: &str = "file://{file_path}";

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Unsupported resource URI: {uri} (expected file://{{file_path}})")]
    UnsupportedUri { uri: String },

    /// Same error, and same message, that [`read_file`] would report.
    #[error(transparent)]
    File(#[from] FileError),
}

/// Path part of a `file://` URI, or `None` for other schemes.
pub fn file_path_from_uri(uri: &str) -> Option<&str> {
    uri.strip_prefix(FILE_URI_SCHEME)
}

/// Build the `file://` URI for `file_path`.
pub fn file_uri(file_path: &str) -> String {
    format!("{FILE_URI_SCHEME}{file_path}")
}

/// Read the file addressed by `uri`.
///
/// `read_file_resource("file://X")` yields exactly what `read_file("X")` does.
pub fn read_file_resource(uri: &str) -> Result<String, ResourceError> {
    let file_path = file_path_from_uri(uri).ok_or_else(|| ResourceError::UnsupportedUri {
        uri: uri.to_string(),
    })?;
    Ok(read_file(file_path)?)
}
