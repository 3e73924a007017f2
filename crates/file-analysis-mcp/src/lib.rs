// Rust guideline compliant 2026-10-19

//! MCP host adapter for the File Analysis tools.
//!
//! Registers `analyze_text`, `read_file` and `list_files` as rmcp tools and
//! the `file://{file_path}` resource template, then serves them over stdio.

pub mod config;
pub mod logging;
pub mod resources;
pub mod server;
pub mod tools;

pub use config::{ServerArgs, ServerConfig, DEFAULT_SERVER_LOG, SERVER_NAME};
pub use logging::init_tracing;
pub use server::{run_stdio_server, serve_stdio};
pub use tools::FileAnalysisServer;
