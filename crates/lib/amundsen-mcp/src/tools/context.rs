use amundsen_core::CatalogTransport;
use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::AmundsenMcp;

/// Payload listing the catalog MCP commands.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands exposed by this server.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "get_table_columns - Columns (name, type, description) and partition keys of a table."
                    .to_string(),
                "get_table_date_range - Earliest and latest partition of a table."
                    .to_string(),
                "get_table_owners - User ids owning a table.".to_string(),
                "get_table_lineage_info - Upstream and downstream entities of a table (depth, direction)."
                    .to_string(),
                "get_table_dashboard_info - Dashboards built from a table.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl<T: CatalogTransport> AmundsenMcp<T> {
    #[tool(description = "List the MCP commands exposed by this server.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
