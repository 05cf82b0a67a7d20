//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the dictionary
//! servers: configuration, logging setup, server lifecycle management, and
//! the stdio transport.

pub mod config;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::Config;
pub use logging::init_logging;
pub use server::McpServer;
pub use transport::StdioTransport;
