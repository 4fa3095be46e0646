//! Uniform result envelope shared by every tool.
//!
//! A tool either succeeds with a text rendering plus a structured payload,
//! or fails with a diagnostic message. The two cases are separate variants,
//! so a payload can never accompany an error.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use super::ToolError;

/// Outcome of a single tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The tool produced a result.
    Success {
        /// Human-readable rendering of the result.
        text: String,
        /// The same data as typed JSON fields.
        payload: serde_json::Value,
    },
    /// The input was rejected.
    Error {
        /// Short, specific diagnostic for the caller.
        message: String,
    },
}

impl ToolOutcome {
    /// Build a success outcome from a serializable payload.
    pub fn success<T: Serialize>(text: impl Into<String>, payload: &T) -> Result<Self, ToolError> {
        let payload = serde_json::to_value(payload)
            .map_err(|e| ToolError::internal(format!("failed to serialize result: {}", e)))?;
        Ok(Self::Success {
            text: text.into(),
            payload,
        })
    }

    /// Build an error outcome, logging the rejection.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!("{}", message);
        Self::Error { message }
    }

    /// Whether this outcome is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The text shown to the caller, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text, .. } => text,
            Self::Error { message } => message,
        }
    }

    /// The structured payload, present only on success.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            Self::Error { .. } => None,
        }
    }
}

impl From<ToolOutcome> for CallToolResult {
    fn from(outcome: ToolOutcome) -> Self {
        match outcome {
            ToolOutcome::Success { text, payload } => CallToolResult {
                content: vec![Content::text(text)],
                structured_content: Some(payload),
                is_error: Some(false),
                meta: None,
            },
            ToolOutcome::Error { message } => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}
