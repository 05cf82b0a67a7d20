//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and only mode for
//! these servers. Shuts down cleanly when the client closes the stream or
//! the process receives an interrupt.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the peer disconnects or an interrupt
    /// signal arrives.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::ServiceError(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
