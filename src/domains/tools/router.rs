//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Used by the STDIO and TCP transports. Each tool knows how to create its
//! own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    FormatCurrencyTool, RomanNumeralTool, SlugifyTool, TemperatureConvertTool, ToolDefinition,
    WordCountTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(WordCountTool::create_route())
        .with_route(FormatCurrencyTool::create_route())
        .with_route(SlugifyTool::create_route())
        .with_route(RomanNumeralTool::create_route())
        .with_route(TemperatureConvertTool::create_route())
}
