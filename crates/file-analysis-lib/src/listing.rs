// Rust guideline compliant 2026-10-19

//! Non-recursive directory listing split into files and subdirectories.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory listed when the caller does not name one.
pub const DEFAULT_DIRECTORY: &str = ".";

/// Immediate entries of a directory, in the order the OS returned them.
///
/// Entries are classified by following symlinks. Anything that resolves to
/// neither a regular file nor a directory (broken symlinks, sockets, FIFOs,
/// devices) is left out of both lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

/// Errors that can occur while listing a directory.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Directory not found: {path}")]
    NotFound { path: String },

    #[error("Error listing directory: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Wire form of a listing outcome: `{files, directories}` or `{error}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListingReport {
    Listing(DirectoryListing),
    Error { error: String },
}

impl ListingReport {
    /// True for the `{error}` shape.
    pub fn is_error(&self) -> bool {
        matches!(self, ListingReport::Error { .. })
    }
}

impl From<Result<DirectoryListing, ListError>> for ListingReport {
    fn from(result: Result<DirectoryListing, ListError>) -> Self {
        match result {
            Ok(listing) => ListingReport::Listing(listing),
            Err(err) => ListingReport::Error {
                error: err.to_string(),
            },
        }
    }
}

/// List the immediate entries of `directory`.
///
/// # Errors
/// * [`ListError::NotFound`] when nothing exists at `directory`
/// * [`ListError::Io`] for any other failure (not a directory, permission
///   denied, an error while iterating entries)
pub fn list_files(directory: &str) -> Result<DirectoryListing, ListError> {
    let dir = Path::new(directory);
    if !dir.exists() {
        tracing::debug!(path = directory, "directory not found");
        return Err(ListError::NotFound {
            path: directory.to_string(),
        });
    }

    let io_err = |source: io::Error| {
        tracing::warn!(path = directory, error = %source, "failed to list directory");
        ListError::Io {
            path: directory.to_string(),
            source,
        }
    };

    let mut listing = DirectoryListing::default();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => listing.files.push(name),
            Ok(meta) if meta.is_dir() => listing.directories.push(name),
            Ok(_) => tracing::debug!(entry = %name, "skipping special entry"),
            Err(err) => tracing::debug!(entry = %name, error = %err, "skipping unresolvable entry"),
        }
    }

    tracing::debug!(
        path = directory,
        files = listing.files.len(),
        directories = listing.directories.len(),
        "listed directory"
    );
    Ok(listing)
}
