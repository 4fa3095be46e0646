//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use utility_mcp_server::core::{Config, McpServer, TransportService, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is not up yet; a config error is printed by the runtime.
    let config = Config::from_env()?;

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone());

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    if let Err(e) = transport.run(server).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Events go to stderr, one line each; stdout belongs to the STDIO transport.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::from_default_env().add_directive(logging.tracing_level().into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
