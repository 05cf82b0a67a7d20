//! Tool Registry - central registration and direct dispatch for all tools.
//!
//! This module provides:
//! - A registry of the tools a process exposes
//! - Direct name-based dispatch with argument validation
//! - Tool metadata for listing
//!
//! The registry mirrors the router: the wire transport goes through rmcp's
//! `ToolRouter`, while the registry gives the same call-tool semantics,
//! validation errors included, to direct callers and tests.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::core::config::Config;

use super::definitions::{
    DictionaryEntriesParams, DictionaryEntriesTool, DictionaryLookupParams, DictionaryLookupTool,
    SumParams, SumTool,
};
use super::error::ToolError;
use super::router::ToolSet;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages the tools of one tool set.
pub struct ToolRegistry {
    config: Arc<Config>,
    tool_set: ToolSet,
}

impl ToolRegistry {
    /// Create a new tool registry for one tool set.
    pub fn new(config: Arc<Config>, tool_set: ToolSet) -> Self {
        Self { config, tool_set }
    }

    /// Get the names of the registered tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        match self.tool_set {
            ToolSet::DictionaryLookup => vec![DictionaryLookupTool::NAME],
            ToolSet::DictionaryEntries => vec![DictionaryEntriesTool::NAME],
            ToolSet::SumDemo => vec![SumTool::NAME],
        }
    }

    /// Get the registered tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        match self.tool_set {
            ToolSet::DictionaryLookup => vec![DictionaryLookupTool::to_tool()],
            ToolSet::DictionaryEntries => vec![DictionaryEntriesTool::to_tool()],
            ToolSet::SumDemo => vec![SumTool::to_tool()],
        }
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Validates the tool name and the argument shape before invoking the
    /// tool. Unknown names yield `ToolError::NotFound`; malformed or
    /// missing arguments yield `ToolError::InvalidArguments`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        if !self.tool_names().contains(&name) {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        }

        match name {
            DictionaryLookupTool::NAME => {
                let params: DictionaryLookupParams = parse_params(arguments)?;
                Ok(DictionaryLookupTool::execute(&params, &self.config))
            }
            DictionaryEntriesTool::NAME => {
                let params: DictionaryEntriesParams = parse_params(arguments)?;
                Ok(DictionaryEntriesTool::execute(&params, &self.config))
            }
            SumTool::NAME => {
                let params: SumParams = parse_params(arguments)?;
                Ok(SumTool::execute(&params))
            }
            _ => Err(ToolError::not_found(name)),
        }
    }
}

/// Deserialize tool arguments, mapping failures to input-validation errors.
fn parse_params<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
