//! Tools domain module.
//!
//! This module handles all tool-related functionality for the dictionary
//! servers. Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder per tool set for the stdio transport
//! - `registry.rs` - Central tool registry and direct name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params and execute()
//! 3. Export in `definitions/mod.rs`
//! 4. Add a route in `router.rs` under the owning `ToolSet`
//! 5. Register in `registry.rs` for direct dispatch
//!
//! **No need to modify `server.rs`!** The router is built per tool set.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::{ToolSet, build_tool_router};
