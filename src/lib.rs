//! Utility MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing small, pure utility tools:
//! word counting, currency formatting, slug generation, Roman numeral
//! conversion and temperature conversion.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool definitions, their result envelope and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use utility_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
