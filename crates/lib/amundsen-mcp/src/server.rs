//! MCP server runners for amundsen-mcp.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use amundsen_core::{CatalogControlPlane, CatalogTransport};
use axum::Router;
use axum::routing::get;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::AmundsenMcp;

pub const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";

/// Configuration for the MCP streamable HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: true,
            sse_keep_alive: Some(Duration::from_secs(15)),
            sse_retry: Some(Duration::from_secs(3)),
        }
    }
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio<T: CatalogTransport>(
    control: CatalogControlPlane<T>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = AmundsenMcp::new(control);
    let (stdin, stdout) = stdio();
    info!("amundsen-mcp serving on stdio");
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Serves the MCP server using streamable HTTP transport on `/mcp`.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http<T: CatalogTransport>(
    control: CatalogControlPlane<T>,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service: StreamableHttpService<AmundsenMcp<T>, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(AmundsenMcp::new(control.clone())),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: config.sse_keep_alive,
                sse_retry: config.sse_retry,
                stateful_mode: config.stateful_mode,
                ..Default::default()
            },
        );

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", service);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "amundsen-mcp listening on streamable HTTP");
    axum::serve(listener, app).await?;
    Ok(())
}
