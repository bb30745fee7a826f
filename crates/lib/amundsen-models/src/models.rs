use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::make_resource_id;

/// Reference to a single catalog table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub database: String,
    pub schema: String,
    pub table: String,
}

/// Raised when a table reference has an empty component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTableRef {
    pub field: &'static str,
}

impl fmt::Display for InvalidTableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.field)
    }
}

impl Error for InvalidTableRef {}

impl TableRef {
    /// Builds a table reference, rejecting blank components.
    ///
    /// # Errors
    /// Returns `InvalidTableRef` naming the first blank component.
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, InvalidTableRef> {
        let table_ref = Self {
            database: database.into(),
            schema: schema.into(),
            table: table.into(),
        };
        table_ref.validate()?;
        Ok(table_ref)
    }

    /// Checks that every component is non-blank.
    ///
    /// # Errors
    /// Returns `InvalidTableRef` naming the first blank component.
    pub fn validate(&self) -> Result<(), InvalidTableRef> {
        for (field, value) in [
            ("database", &self.database),
            ("schema", &self.schema),
            ("table", &self.table),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidTableRef { field });
            }
        }
        Ok(())
    }

    /// Catalog resource key, `<database>://gold.<schema>/<table>`.
    #[must_use]
    pub fn resource_id(&self) -> String {
        make_resource_id(&self.database, &self.schema, &self.table)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_id())
    }
}

/// One column in the normalized column listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub col_type: Option<Value>,
    pub description: Option<Value>,
}

/// Columns of a table plus the subset badged as partition keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMetadata {
    pub columns: Vec<ColumnSummary>,
    pub partition_keys: Vec<ColumnSummary>,
}

/// Partition key and value recorded by a watermark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatermarkBound {
    pub key: Option<Value>,
    pub value: Option<Value>,
}

/// Earliest and latest partitions present in a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<WatermarkBound>,
    pub to: Option<WatermarkBound>,
}

impl DateRange {
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Dashboard built on top of a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardRef {
    pub url: Option<Value>,
    pub dashboard_name: Option<Value>,
    pub collection_name: Option<Value>,
}

/// Upstream and downstream entities, passed through as the catalog returns them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lineage {
    pub upstream: Option<Value>,
    pub downstream: Option<Value>,
}

/// Direction of a lineage traversal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineageDirection {
    #[default]
    Both,
    Upstream,
    Downstream,
}

impl LineageDirection {
    pub const ALL: [Self; 3] = [Self::Both, Self::Upstream, Self::Downstream];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Upstream => "upstream",
            Self::Downstream => "downstream",
        }
    }
}

impl fmt::Display for LineageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for a direction outside `both`, `upstream`, `downstream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDirection(pub String);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid direction '{}'. Must be one of: both, upstream, downstream",
            self.0
        )
    }
}

impl Error for InvalidDirection {}

impl FromStr for LineageDirection {
    type Err = InvalidDirection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == value)
            .ok_or_else(|| InvalidDirection(value.to_string()))
    }
}
