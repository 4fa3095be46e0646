//! Tools domain module.
//!
//! Tools are pure functions callable by MCP clients: text statistics,
//! slugs, currency formatting, Roman numerals and temperature conversion.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `outcome.rs` - The success/error envelope every tool returns
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool listing and name-based dispatch for HTTP
//! - `error.rs` - Dispatch-level error types

pub mod definitions;
mod error;
mod outcome;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use outcome::ToolOutcome;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
