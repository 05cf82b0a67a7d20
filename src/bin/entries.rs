//! `ldoce-entries` entry point.
//!
//! Serves the `get_dictionary_entries` tool over MCP stdio.

use anyhow::Result;
use tracing::info;

use ldoce_mcp_server::core::{Config, McpServer, StdioTransport, init_logging};
use ldoce_mcp_server::domains::tools::ToolSet;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!(
        "Starting {} v{} (dictionary entries)",
        config.server.name, config.server.version
    );

    let server = McpServer::new(config, ToolSet::DictionaryEntries);

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}
