/// Catalog path segment for table resources.
pub const TABLE_PATH: &str = "table";
/// Path suffix for table lineage lookups.
pub const LINEAGE_PATH: &str = "lineage";
/// Path suffix for dashboards built on a table.
pub const DASHBOARD_PATH: &str = "dashboard/";
/// Cluster segment baked into every table resource key.
pub const GOLD_CLUSTER: &str = "gold";

pub const BADGE_PARTITION_COLUMN: &str = "partition column";

pub const WATERMARK_LOW: &str = "low_watermark";
pub const WATERMARK_HIGH: &str = "high_watermark";

pub const FIELD_ERROR: &str = "error";
pub const FIELD_COLUMNS: &str = "columns";
pub const FIELD_WATERMARKS: &str = "watermarks";
pub const FIELD_OWNERS: &str = "owners";
pub const FIELD_DASHBOARDS: &str = "dashboards";
pub const FIELD_UPSTREAM_ENTITIES: &str = "upstream_entities";
pub const FIELD_DOWNSTREAM_ENTITIES: &str = "downstream_entities";

pub const DEFAULT_LINEAGE_DEPTH: u32 = 1;

#[must_use]
pub fn make_resource_id(database: &str, schema: &str, table: &str) -> String {
    format!("{database}://{GOLD_CLUSTER}.{schema}/{table}")
}
