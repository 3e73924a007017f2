// Rust guideline compliant 2026-10-19

use file_analysis::{ListingReport, DEFAULT_DIRECTORY};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content},
    schemars, ErrorData as McpError,
};
use serde::Deserialize;

use crate::config::ServerConfig;

/// Input for text analysis.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextInput {
    #[schemars(description = "The text content to analyze")]
    pub text: String,
}

/// Input for reading one file.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadFileInput {
    #[schemars(description = "Path to the file to read")]
    pub file_path: String,
}

/// Input for listing a directory.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFilesInput {
    #[schemars(description = "Directory path to list files from (default: current directory)")]
    #[serde(default = "default_directory")]
    pub directory: String,
}

fn default_directory() -> String {
    DEFAULT_DIRECTORY.to_string()
}

/// MCP server exposing the File Analysis tools and `file://` resources.
///
/// The tool router is built once in [`FileAnalysisServer::new`] and is the
/// only registry of callable tools.
#[derive(Debug, Clone)]
pub struct FileAnalysisServer {
    pub tool_router: ToolRouter<Self>,
    pub(crate) config: ServerConfig,
}

#[rmcp::tool_router]
impl FileAnalysisServer {
    /// Construct a new server instance.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
        }
    }

    /// Character, word and line counts plus character and word frequencies.
    #[rmcp::tool(
        description = "Analyze text content and return statistics, character frequency and the top 10 words as JSON"
    )]
    fn analyze_text(
        &self,
        Parameters(input): Parameters<AnalyzeTextInput>,
    ) -> Result<CallToolResult, McpError> {
        let analysis = file_analysis::analyze_text(&input.text);
        Ok(CallToolResult::success(vec![Content::json(analysis)?]))
    }

    /// Full text of one file, or the read error flagged as a tool error.
    #[rmcp::tool(description = "Read the contents of a text file")]
    fn read_file(
        &self,
        Parameters(input): Parameters<ReadFileInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(match file_analysis::read_file(&input.file_path) {
            Ok(content) => CallToolResult::success(vec![Content::text(content)]),
            Err(err) => CallToolResult::error(vec![Content::text(err.to_string())]),
        })
    }

    /// Files and subdirectories of one directory.
    #[rmcp::tool(
        description = "List files and directories in a directory (defaults to the current directory)"
    )]
    fn list_files(
        &self,
        Parameters(input): Parameters<ListFilesInput>,
    ) -> Result<CallToolResult, McpError> {
        let report = ListingReport::from(file_analysis::list_files(&input.directory));
        let content = vec![Content::json(&report)?];
        Ok(if report.is_error() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        })
    }
}
