//! LDOCE Dictionary MCP Server Library
//!
//! This crate provides Model Context Protocol (MCP) servers that scrape the
//! Longman Dictionary of Contemporary English and return normalized JSON
//! dictionary records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, logging, the main
//!   server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients, grouped by
//!     family (`ldoce` dictionary scrapers, `demo` arithmetic)
//!
//! Three binaries share this library, one per tool family process:
//! `ldoce-lookup`, `ldoce-entries`, and `sum-demo`.
//!
//! # Example
//!
//! ```rust,no_run
//! use ldoce_mcp_server::core::{Config, McpServer};
//! use ldoce_mcp_server::domains::tools::ToolSet;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config, ToolSet::DictionaryLookup);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use self::core::{Config, McpServer};
