// Rust guideline compliant 2026-10-19

//! Read a text file into a string.
//!
//! Failures are returned as [`FileError`] values whose `Display` text is the
//! message MCP clients see, e.g. `Error: File not found at notes.txt`.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading a file.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Error: File not found at {path}")]
    NotFound { path: String },

    #[error("Error reading file: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Path the failed read was attempted on.
    pub fn path(&self) -> &str {
        match self {
            FileError::NotFound { path } | FileError::Read { path, .. } => path,
        }
    }

    /// True when nothing existed at the path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound { .. })
    }
}

/// Result type for file operations
pub type Result<T> = std::result::Result<T, FileError>;

/// Read the entire file at `file_path` as UTF-8 text.
///
/// `\r\n` and lone `\r` line endings are translated to `\n`. No size limit is
/// enforced.
///
/// # Errors
/// * [`FileError::NotFound`] when nothing exists at `file_path`
/// * [`FileError::Read`] when the path exists but cannot be opened or is not
///   valid UTF-8 (directories, permission denied, binary content)
pub fn read_file(file_path: &str) -> Result<String> {
    let path = Path::new(file_path);
    if !path.exists() {
        tracing::debug!(path = file_path, "file not found");
        return Err(FileError::NotFound {
            path: file_path.to_string(),
        });
    }

    let raw = fs::read_to_string(path).map_err(|source| {
        tracing::warn!(path = file_path, error = %source, "failed to read file");
        FileError::Read {
            path: file_path.to_string(),
            source,
        }
    })?;

    tracing::debug!(path = file_path, bytes = raw.len(), "read file");
    Ok(translate_newlines(raw))
}

fn translate_newlines(raw: String) -> String {
    if !raw.contains('\r') {
        return raw;
    }
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::{read_file, translate_newlines, FileError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reports_exact_message() {
        let err = read_file("definitely/not/here.txt").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Error: File not found at definitely/not/here.txt"
        );
        assert_eq!(err.path(), "definitely/not/here.txt");
    }

    #[test]
    fn reads_utf8_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello\nwörld\n").unwrap();
        let content = read_file(path.to_str().unwrap()).unwrap();
        assert_eq!(content, "hello\nwörld\n");
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert!(err.to_string().starts_with("Error reading file: "));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let err = read_file(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Error reading file: "));
    }

    #[test]
    fn newlines_are_translated() {
        assert_eq!(translate_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
        assert_eq!(translate_newlines("plain".to_string()), "plain");
    }
}
