//! `sum-demo` entry point.
//!
//! Serves the `sum` tool over MCP stdio. Kept as a minimal demonstration
//! of the tool-calling protocol.

use anyhow::Result;
use tracing::info;

use ldoce_mcp_server::core::{Config, McpServer, StdioTransport, init_logging};
use ldoce_mcp_server::domains::tools::ToolSet;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!(
        "Starting {} v{} (sum demo)",
        config.server.name, config.server.version
    );

    let server = McpServer::new(config, ToolSet::SumDemo);

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}
