use amundsen_core::CatalogTransport;
use amundsen_models::TableRef;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AmundsenMcp, helpers};

/// Parameters identifying a single catalog table.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TableParams {
    /// The database name, e.g. `hive`.
    pub database: String,
    /// The schema name.
    pub schema_name: String,
    /// The table name.
    pub table_name: String,
}

impl From<TableParams> for TableRef {
    fn from(params: TableParams) -> Self {
        Self {
            database: params.database,
            schema: params.schema_name,
            table: params.table_name,
        }
    }
}

/// Parameters for a lineage lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LineageParams {
    pub database: String,
    pub schema_name: String,
    pub table_name: String,
    /// The number of levels to traverse (default: 1).
    pub depth: Option<u32>,
    /// One of `both`, `upstream`, `downstream` (default: `both`).
    pub direction: Option<String>,
}

#[tool_router(router = tool_router_table, vis = "pub")]
impl<T: CatalogTransport> AmundsenMcp<T> {
    #[tool(description = "Fetch the columns of a table (name, type, description) and its partition keys.")]
    async fn get_table_columns(
        &self,
        Parameters(params): Parameters<TableParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let table = TableRef::from(params);
        debug!(%table, "get_table_columns");
        helpers::outcome_result(self.control().table_columns(&table).await)
    }

    #[tool(description = "Fetch the available date range of a table: earliest and latest partition with their partition key.")]
    async fn get_table_date_range(
        &self,
        Parameters(params): Parameters<TableParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let table = TableRef::from(params);
        debug!(%table, "get_table_date_range");
        helpers::outcome_result(self.control().table_date_range(&table).await)
    }

    #[tool(description = "Fetch the owners (user ids) of a table.")]
    async fn get_table_owners(
        &self,
        Parameters(params): Parameters<TableParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let table = TableRef::from(params);
        debug!(%table, "get_table_owners");
        helpers::outcome_result(self.control().table_owners(&table).await)
    }

    #[tool(description = "Fetch upstream (source) and downstream (target) lineage of a table. depth defaults to 1, direction to \"both\".")]
    async fn get_table_lineage_info(
        &self,
        Parameters(params): Parameters<LineageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let LineageParams {
            database,
            schema_name,
            table_name,
            depth,
            direction,
        } = params;
        let table = TableRef {
            database,
            schema: schema_name,
            table: table_name,
        };
        debug!(%table, ?depth, ?direction, "get_table_lineage_info");
        helpers::outcome_result(
            self.control()
                .table_lineage(&table, depth, direction.as_deref())
                .await,
        )
    }

    #[tool(description = "Fetch dashboards built from a table (url, dashboard_name, collection_name).")]
    async fn get_table_dashboard_info(
        &self,
        Parameters(params): Parameters<TableParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let table = TableRef::from(params);
        debug!(%table, "get_table_dashboard_info");
        helpers::outcome_result(self.control().table_dashboards(&table).await)
    }
}
