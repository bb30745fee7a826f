//! Daemon entry point for the Amundsen metadata MCP server.
//!
//! Loads configuration from arguments and the environment, builds the catalog
//! control plane, and serves the MCP protocol over stdio and/or streamable HTTP.

mod config;

use amundsen_core::{CatalogControlPlane, HttpTransport};
use amundsen_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AmundsenConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AmundsenConfig::from_args()?;
    init_tracing(&config.log_filter);

    let transport = HttpTransport::new(config.request_timeout)?;
    let control = CatalogControlPlane::new(&config.api_url, transport);
    info!(
        api_url = %config.api_url,
        stdio = config.enable_stdio,
        http = config.mcp_serve,
        "starting amundsen-mcpd"
    );

    if config.mcp_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        if !config.enable_stdio {
            return serve_streamable_http(control, http_config).await;
        }
        let http_control = control.clone();
        tokio::spawn(async move {
            if let Err(err) = serve_streamable_http(http_control, http_config).await {
                error!(error = %err, "streamable HTTP server stopped");
            }
        });
    }

    serve_stdio(control).await
}

// Logs go to stderr; stdout carries the stdio MCP stream.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
