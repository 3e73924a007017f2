// Rust guideline compliant 2026-10-19

//! Library entry point for the File Analysis tools.
//!
//! Four stateless operations back the MCP server and the CLI:
//! - [`analyze_text`]: character/word/line counts, character frequencies and
//!   the ten most common words;
//! - [`read_file`]: a file's UTF-8 text;
//! - [`list_files`]: immediate files and subdirectories of a directory;
//! - [`read_file_resource`]: `file://{file_path}` access delegating to
//!   `read_file`.
//!
//! Failures are typed (`FileError`, `ListError`, `ResourceError`); their
//! `Display` output is the user-facing message the server returns verbatim.

pub mod files;
pub mod listing;
pub mod resource;
pub mod text;

// Re-export primary types for ergonomic use.
pub use files::{read_file, FileError};
pub use listing::{list_files, DirectoryListing, ListError, ListingReport, DEFAULT_DIRECTORY};
pub use resource::{
    file_path_from_uri, file_uri, read_file_resource, ResourceError, FILE_URI_SCHEME,
    FILE_URI_TEMPLATE,
};
pub use text::{analyze_text, AnalysisResult, FrequencyTable, TextStatistics, TOP_WORDS_LIMIT};
