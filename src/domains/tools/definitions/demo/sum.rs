//! Sum tool - adds two numbers.
//!
//! A trivial tool kept around to demonstrate the tool-calling protocol
//! without any network dependency.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the sum tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SumParams {
    /// First addend.
    #[schemars(description = "First number")]
    pub a: f64,

    /// Second addend.
    #[schemars(description = "Second number")]
    pub b: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Sum tool - adds two numbers and returns `{"result": n}`.
pub struct SumTool;

impl SumTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "sum";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers and return the result.";

    /// Execute the tool logic.
    pub fn execute(params: &SumParams) -> CallToolResult {
        info!("Sum tool called: {} + {}", params.a, params.b);

        let result = serde_json::json!({ "result": number_value(params.a + params.b) });
        CallToolResult::success(vec![Content::text(result.to_string())])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SumParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SumParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

/// Render whole sums as JSON integers, matching how callers wrote them.
fn number_value(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&n) {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

// ============================================================================
// Tests
// ============================================================================
