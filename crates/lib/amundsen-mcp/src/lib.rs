//! MCP server implementation for amundsen-mcp.
//!
//! This crate wires the catalog control plane into rmcp tool handlers and
//! exposes the agent-facing table metadata tools.

mod helpers;
mod tools;
pub mod server;

use amundsen_core::{CatalogControlPlane, CatalogTransport};
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

pub use tools::table::{LineageParams, TableParams};

const SERVER_INSTRUCTIONS: &str = r#"amundsen-mcp answers questions about tables registered in an Amundsen metadata catalog.

Every table tool takes `database`, `schema_name` and `table_name`; the table is resolved to the
catalog key `{database}://gold.{schema_name}/{table_name}`.

Tools:
- `get_table_columns`: columns (name, type, description) and the columns badged as partition keys.
- `get_table_date_range`: earliest (`from`) and latest (`to`) partition key/value of the table.
- `get_table_owners`: user ids owning the table.
- `get_table_lineage_info`: upstream and downstream entities. Optional `depth` (default 1) and
  `direction` (`both`, `upstream`, `downstream`; default `both`).
- `get_table_dashboard_info`: dashboards built from the table (url, dashboard_name, collection_name).

Results:
- When the catalog has nothing for a table a short sentence is returned, e.g. `the table has no owners`.
- When the lookup fails the result is flagged as an error and carries `{"error": ...}`.
- `help` lists the commands and `health` returns `ok`."#;

/// MCP server wrapper around the catalog control plane and tool routers.
pub struct AmundsenMcp<T: CatalogTransport> {
    tool_router: ToolRouter<Self>,
    control: CatalogControlPlane<T>,
}

impl<T: CatalogTransport> Clone for AmundsenMcp<T> {
    fn clone(&self) -> Self {
        Self {
            tool_router: self.tool_router.clone(),
            control: self.control.clone(),
        }
    }
}

impl<T: CatalogTransport> AmundsenMcp<T> {
    /// Creates a new server around a catalog control plane.
    #[must_use]
    pub fn new(control: CatalogControlPlane<T>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_table()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) const fn control(&self) -> &CatalogControlPlane<T> {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl<T: CatalogTransport> AmundsenMcp<T> {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl<T: CatalogTransport> ServerHandler for AmundsenMcp<T> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
