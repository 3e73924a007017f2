// Rust guideline compliant 2026-10-19

use anyhow::{Context, Result};
use rmcp::{
    model::*, service::RequestContext, tool_handler, transport::stdio, ErrorData as McpError,
    RoleServer, ServerHandler, ServiceExt,
};

use crate::config::ServerConfig;
use crate::resources::{read_resource_contents, FILE_TEMPLATE};
use crate::tools::FileAnalysisServer;

#[tool_handler]
impl ServerHandler for FileAnalysisServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            instructions: Some(self.config.instructions.clone()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(vec![
            FILE_TEMPLATE.to_model()?,
        ]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        read_resource_contents(&request.uri)
    }
}

/// Serve `config` over stdin/stdout until the client disconnects.
pub async fn serve_stdio(config: ServerConfig) -> Result<()> {
    tracing::info!("starting File Analysis MCP server on stdio");
    let service = FileAnalysisServer::new(config)
        .serve(stdio())
        .await
        .context("initializing MCP session on stdio")?;
    service.waiting().await.context("MCP server task failed")?;
    tracing::info!("MCP server stopped");
    Ok(())
}

/// Blocking entry point: build a tokio runtime and run [`serve_stdio`].
pub fn run_stdio_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("building tokio runtime")?;
    runtime.block_on(serve_stdio(config))
}
