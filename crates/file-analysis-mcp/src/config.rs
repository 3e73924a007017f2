// Rust guideline compliant 2026-10-19

//! Server configuration and the command-line arguments that populate it.

use clap::Args;

/// Instructions sent to MCP clients during initialization.
pub const DEFAULT_INSTRUCTIONS: &str = "File Analysis MCP Server: tools for analyzing text files. \
Use analyze_text for statistics, read_file to fetch a file's text, list_files to browse a \
directory, or read the file://{file_path} resource.";

/// Name reported to MCP clients in `serverInfo`.
pub const SERVER_NAME: &str = "file-analysis-mcp";

/// Default tracing directives for the server binary.
pub const DEFAULT_SERVER_LOG: &str = "info";

/// Identity and behaviour of one server instance.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub instructions: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }
}

/// Arguments shared by every entry point that launches the server.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Override the instructions text reported to MCP clients.
    #[arg(long, env = "FILE_ANALYSIS_INSTRUCTIONS", value_name = "TEXT")]
    pub instructions: Option<String>,
}

impl From<&ServerArgs> for ServerConfig {
    fn from(args: &ServerArgs) -> Self {
        let mut config = ServerConfig::default();
        if let Some(text) = &args.instructions {
            config.instructions = text.clone();
        }
        config
    }
}
