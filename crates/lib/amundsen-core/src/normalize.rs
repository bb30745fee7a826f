//! Metadata normalizer.
//!
//! Pure functions that reduce one raw catalog payload to the shapes agents
//! consume. Every function accepts any JSON shape: missing or mistyped fields
//! read as empty collections. An `error` key on the payload marks a failed
//! lookup and is propagated unchanged.

use amundsen_models::schema::{
    BADGE_PARTITION_COLUMN,
    FIELD_COLUMNS,
    FIELD_DASHBOARDS,
    FIELD_DOWNSTREAM_ENTITIES,
    FIELD_ERROR,
    FIELD_OWNERS,
    FIELD_UPSTREAM_ENTITIES,
    FIELD_WATERMARKS,
    WATERMARK_HIGH,
    WATERMARK_LOW,
};
use amundsen_models::{
    ColumnMetadata,
    ColumnSummary,
    DashboardRef,
    DateRange,
    Lineage,
    WatermarkBound,
};
use serde_json::Value;

use crate::error::CatalogError;
use crate::outcome::{EmptyReason, Outcome};

/// Columns in source order, plus those badged `partition column`.
#[must_use]
pub fn extract_columns(raw: &Value) -> Outcome<ColumnMetadata> {
    if let Some(err) = error_marker(raw) {
        return Outcome::Failed(err);
    }

    let mut metadata = ColumnMetadata::default();
    for column in array_field(raw, FIELD_COLUMNS) {
        let summary = ColumnSummary {
            name: present_field(column, "name"),
            col_type: present_field(column, "col_type"),
            description: present_field(column, "description"),
        };
        if is_partition_column(column) {
            metadata.partition_keys.push(summary.clone());
        }
        metadata.columns.push(summary);
    }
    Outcome::Found(metadata)
}

/// Low and high watermarks; the last entry of each type wins.
#[must_use]
pub fn extract_date_range(raw: &Value) -> Outcome<DateRange> {
    if let Some(err) = error_marker(raw) {
        return Outcome::Failed(err);
    }

    let mut range = DateRange::default();
    for watermark in array_field(raw, FIELD_WATERMARKS) {
        let slot = match watermark.get("watermark_type").and_then(Value::as_str) {
            Some(WATERMARK_LOW) => &mut range.from,
            Some(WATERMARK_HIGH) => &mut range.to,
            _ => continue,
        };
        *slot = Some(WatermarkBound {
            key: present_field(watermark, "partition_key"),
            value: present_field(watermark, "partition_value"),
        });
    }

    if range.is_unbounded() {
        Outcome::Empty(EmptyReason::NoDateRange)
    } else {
        Outcome::Found(range)
    }
}

/// Owner user ids in source order, one per entry; duplicates kept and
/// entries without an id read as `null`.
#[must_use]
pub fn extract_owners(raw: &Value) -> Outcome<Vec<Value>> {
    if let Some(err) = error_marker(raw) {
        return Outcome::Failed(err);
    }

    let owners: Vec<Value> = array_field(raw, FIELD_OWNERS)
        .iter()
        .map(|owner| present_field(owner, "user_id").unwrap_or(Value::Null))
        .collect();

    if owners.is_empty() {
        Outcome::Empty(EmptyReason::NoOwners)
    } else {
        Outcome::Found(owners)
    }
}

/// Dashboards built on a table. A missing `dashboards` field reads as none.
///
/// Unlike the metadata extractors this does not look for an `error` key;
/// transport failures never reach it because the control plane stops on them.
#[must_use]
pub fn extract_dashboards(raw: &Value) -> Outcome<Vec<DashboardRef>> {
    let dashboards: Vec<DashboardRef> = array_field(raw, FIELD_DASHBOARDS)
        .iter()
        .map(|dashboard| DashboardRef {
            url: present_field(dashboard, "url"),
            dashboard_name: present_field(dashboard, "name"),
            collection_name: present_field(dashboard, "group_name"),
        })
        .collect();

    if dashboards.is_empty() {
        Outcome::Empty(EmptyReason::NoDashboards)
    } else {
        Outcome::Found(dashboards)
    }
}

/// Upstream and downstream entities under renamed keys.
#[must_use]
pub fn extract_lineage(raw: &Value) -> Outcome<Lineage> {
    if let Some(err) = error_marker(raw) {
        return Outcome::Failed(err);
    }

    let lineage = Lineage {
        upstream: present_field(raw, FIELD_UPSTREAM_ENTITIES),
        downstream: present_field(raw, FIELD_DOWNSTREAM_ENTITIES),
    };

    let has_upstream = lineage.upstream.as_ref().is_some_and(is_truthy);
    let has_downstream = lineage.downstream.as_ref().is_some_and(is_truthy);
    if has_upstream || has_downstream {
        Outcome::Found(lineage)
    } else {
        Outcome::Empty(EmptyReason::NoLineage)
    }
}

fn error_marker(raw: &Value) -> Option<CatalogError> {
    raw.get(FIELD_ERROR).cloned().map(CatalogError::Upstream)
}

fn is_partition_column(column: &Value) -> bool {
    array_field(column, "badges").iter().any(|badge| {
        badge.get("badge_name").and_then(Value::as_str) == Some(BADGE_PARTITION_COLUMN)
    })
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

fn present_field(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|field| !field.is_null()).cloned()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
