//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

#[cfg(any(feature = "tcp", feature = "http"))]
use super::error::Error;
use super::error::Result;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl LoggingConfig {
    /// Resolve the configured level, falling back to INFO for unknown names.
    pub fn tracing_level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "utility-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`.
    ///
    /// Fails when a transport setting cannot be honoured (unparseable port,
    /// transport not compiled into this binary).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        config.transport = TransportConfig::from_env()?;

        Ok(config)
    }
}

/// Interpret an environment flag: anything but `false`/`0` is on.
pub(crate) fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.eq_ignore_ascii_case("false") || value == "0")
}

/// Parse a port number from an environment variable, if set.
#[cfg(any(feature = "tcp", feature = "http"))]
pub(crate) fn env_port(var: &str, default: u16) -> Result<u16> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("{} must be a port number, got '{}'", var, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "utility-mcp-server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.with_timestamps);
        assert!(config.transport.is_stdio());
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "utilities-under-test");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.server.name, "utilities-under-test");
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "carrier-pigeon");
        }
        let result = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
        }
        let err = result.unwrap_err();
        assert!(err.to_string().contains("carrier-pigeon"));
    }

    #[test]
    #[cfg(any(feature = "tcp", feature = "http"))]
    fn test_env_port_invalid() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TEST_PORT", "eighty");
        }
        let result = env_port("MCP_TEST_PORT", 3000);
        unsafe {
            std::env::remove_var("MCP_TEST_PORT");
        }
        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(env_port("MCP_TEST_PORT", 3000).unwrap(), 3000);
    }

    #[test]
    fn test_tracing_level() {
        let mut logging = Config::default().logging;
        assert_eq!(logging.tracing_level(), Level::INFO);
        logging.level = "DEBUG".to_string();
        assert_eq!(logging.tracing_level(), Level::DEBUG);
        logging.level = "verbose".to_string();
        assert_eq!(logging.tracing_level(), Level::INFO);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(" 0 "));
    }
}
