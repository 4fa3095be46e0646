//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (deserialized from the call's argument bag)
//! - A payload struct (the structured result, also used as output schema)
//! - An implementation of [`ToolDefinition`]
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in a submodule (e.g., `text/my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `router.rs` and `registry.rs`

pub mod currency;
pub mod numeral;
pub mod temperature;
pub mod text;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::{ToolError, ToolOutcome};

pub use currency::{FormatCurrencyParams, FormatCurrencyTool};
pub use numeral::{RomanNumeralParams, RomanNumeralTool};
pub use temperature::{TemperatureConvertParams, TemperatureConvertTool};
pub use text::{SlugifyParams, SlugifyTool, WordCountParams, WordCountTool};

/// Trait for tool definitions.
///
/// Implementors supply metadata and the pure `execute` step; routing,
/// argument parsing and schema generation come from the provided methods,
/// so the rmcp router and the HTTP registry share one code path.
pub trait ToolDefinition: Sized + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Structured payload returned on success.
    type Output: JsonSchema + 'static;

    /// Run the tool on already-deserialized arguments.
    ///
    /// Rejected input is an `Ok(ToolOutcome::Error)`; `Err` is reserved for
    /// internal faults.
    fn execute(params: &Self::Params) -> Result<ToolOutcome, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<Self::Output>()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Deserialize a raw argument bag into [`Self::Params`].
    fn parse_params(arguments: serde_json::Value) -> Result<Self::Params, ToolError> {
        serde_json::from_value(arguments).map_err(|e| {
            ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e))
        })
    }

    /// Parse and execute in one step.
    fn call(arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let params = Self::parse_params(arguments)?;
        Self::execute(&params).map(CallToolResult::from)
    }

    /// HTTP handler for this tool (for HTTP transport).
    ///
    /// Serializes the full `CallToolResult` so `structuredContent` and
    /// `isError` survive the trip.
    fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let result = Self::call(arguments)?;
        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let result = Self::call(serde_json::Value::Object(args)).map_err(McpError::from);
            futures::future::ready(result).boxed()
        })
    }
}
