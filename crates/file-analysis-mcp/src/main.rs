// Rust guideline compliant 2026-10-19

use anyhow::Result;
use clap::Parser;
use file_analysis_mcp::{init_tracing, serve_stdio, ServerArgs, ServerConfig, DEFAULT_SERVER_LOG};

/// File Analysis MCP server (stdio transport).
#[derive(Parser)]
#[command(name = "file-analysis-mcp", version)]
struct Cli {
    #[command(flatten)]
    server: ServerArgs,

    /// Log directives used when RUST_LOG is unset (logs go to stderr).
    #[arg(long, env = "FILE_ANALYSIS_LOG", default_value = DEFAULT_SERVER_LOG)]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;
    serve_stdio(ServerConfig::from(&cli.server)).await
}
