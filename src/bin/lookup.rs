//! `ldoce-lookup` entry point.
//!
//! Serves the `get_dictionary_entry` tool over MCP stdio. It initializes
//! logging, loads configuration, and runs until the client disconnects or
//! the process is interrupted.

use anyhow::Result;
use tracing::info;

use ldoce_mcp_server::core::{Config, McpServer, StdioTransport, init_logging};
use ldoce_mcp_server::domains::tools::ToolSet;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!(
        "Starting {} v{} (dictionary lookup)",
        config.server.name, config.server.version
    );

    let server = McpServer::new(config, ToolSet::DictionaryLookup);

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}
