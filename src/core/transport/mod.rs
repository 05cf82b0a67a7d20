//! Transport layer for the dictionary servers.
//!
//! MCP's standard framing is JSON-RPC over stdin/stdout; that is the only
//! transport these processes speak. The transport handles the connection
//! lifecycle and delegates message processing to the MCP server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
