//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for tool calls (used by the HTTP transport)
//! - Tool metadata for listing

use rmcp::model::Tool;
use tracing::warn;

use super::ToolError;
use super::definitions::{
    FormatCurrencyTool, RomanNumeralTool, SlugifyTool, TemperatureConvertTool, ToolDefinition,
    WordCountTool,
};

/// Tool registry - the set of tools this server exposes.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            WordCountTool::NAME,
            FormatCurrencyTool::NAME,
            SlugifyTool::NAME,
            RomanNumeralTool::NAME,
            TemperatureConvertTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            WordCountTool::to_tool(),
            FormatCurrencyTool::to_tool(),
            SlugifyTool::to_tool(),
            RomanNumeralTool::to_tool(),
            TemperatureConvertTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Returns the serialized `CallToolResult`. Rejected input comes back as
    /// a result with `isError: true`; only unknown tools, malformed arguments
    /// and internal faults are `Err`.
    pub fn call_tool(
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            WordCountTool::NAME => WordCountTool::http_handler(arguments),
            FormatCurrencyTool::NAME => FormatCurrencyTool::http_handler(arguments),
            SlugifyTool::NAME => SlugifyTool::http_handler(arguments),
            RomanNumeralTool::NAME => RomanNumeralTool::http_handler(arguments),
            TemperatureConvertTool::NAME => TemperatureConvertTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"word_count"));
        assert!(names.contains(&"format_currency"));
        assert!(names.contains(&"slugify"));
        assert!(names.contains(&"roman_numeral"));
        assert!(names.contains(&"temperature_convert"));
    }

    #[test]
    fn test_tools_match_names() {
        let tools = ToolRegistry::get_all_tools();
        let names = ToolRegistry::tool_names();
        assert_eq!(tools.len(), names.len());
        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name, name);
        }
    }

    #[test]
    fn test_call_success() {
        let result = ToolRegistry::call_tool("roman_numeral", json!({ "number": 1994 })).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "MCMXCIV");
        assert_eq!(result["structuredContent"]["roman"], "MCMXCIV");
    }

    #[test]
    fn test_call_user_error_is_ok_with_flag() {
        let result =
            ToolRegistry::call_tool("format_currency", json!({ "amount": 1.0, "currency": "ABC" }))
                .unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Unsupported currency: ABC");
    }

    #[test]
    fn test_call_unknown() {
        let result = ToolRegistry::call_tool("unknown", json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[test]
    fn test_call_malformed_arguments() {
        let result = ToolRegistry::call_tool("slugify", json!({ "text": 42 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
