use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use amundsen_core::{CatalogControlPlane, CatalogError, EmptyReason, HttpTransport, Outcome};
use amundsen_models::TableRef;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;

#[derive(Clone, Default)]
struct FakeCatalog {
    requests: Arc<Mutex<Vec<String>>>,
}

async fn table_resource(
    State(catalog): State<FakeCatalog>,
    Path(resource): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut seen = resource.clone();
    if let (Some(depth), Some(direction)) = (query.get("depth"), query.get("direction")) {
        seen.push_str(&format!("?depth={depth}&direction={direction}"));
    }
    catalog.requests.lock().unwrap().push(seen);

    match resource.as_str() {
        "hive://gold.sales/orders" => axum::Json(json!({
            "key": "hive://gold.sales/orders",
            "columns": [
                {"name": "order_id", "col_type": "bigint", "description": "order key", "badges": []},
                {
                    "name": "ds",
                    "col_type": "string",
                    "description": "partition date",
                    "badges": [{"badge_name": "partition column", "category": "column"}]
                }
            ],
            "watermarks": [
                {"watermark_type": "low_watermark", "partition_key": "ds", "partition_value": "2020-01-01"},
                {"watermark_type": "high_watermark", "partition_key": "ds", "partition_value": "2020-12-31"}
            ],
            "owners": []
        }))
        .into_response(),
        "hive://gold.sales/orders/lineage" => axum::Json(json!({
            "key": "hive://gold.sales/orders",
            "upstream_entities": [{"key": "hive://gold.raw/orders", "level": 1}],
            "downstream_entities": []
        }))
        .into_response(),
        "hive://gold.sales/orders/dashboard/" => axum::Json(json!({
            "dashboards": [
                {"url": "https://bi.example.com/d/1", "name": "Orders", "group_name": "Sales Ops"}
            ]
        }))
        .into_response(),
        "hive://gold.sales/broken" => (
            StatusCode::OK,
            axum::Json(json!({ "error": "metadata backend unavailable" })),
        )
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_catalog() -> (SocketAddr, FakeCatalog) {
    let catalog = FakeCatalog::default();
    let app = Router::new()
        .route("/table/*resource", get(table_resource))
        .with_state(catalog.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake catalog");
    let addr = listener.local_addr().expect("fake catalog addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake catalog server");
    });
    (addr, catalog)
}

fn control_plane(addr: SocketAddr) -> CatalogControlPlane<HttpTransport> {
    let transport = HttpTransport::new(Duration::from_secs(5)).expect("http transport");
    CatalogControlPlane::new(&format!("http://{addr}/"), transport)
}

fn table(name: &str) -> TableRef {
    TableRef::new("hive", "sales", name).expect("valid table ref")
}

#[tokio::test]
async fn metadata_views_over_http() {
    let (addr, _) = spawn_catalog().await;
    let control = control_plane(addr);
    let orders = table("orders");

    let columns = control.table_columns(&orders).await.found().expect("columns");
    assert_eq!(columns.columns.len(), 2);
    assert_eq!(columns.partition_keys.len(), 1);
    assert_eq!(columns.partition_keys[0].name, Some(json!("ds")));

    let range = control.table_date_range(&orders).await;
    assert_eq!(
        serde_json::to_value(&range).unwrap(),
        json!({
            "from": {"key": "ds", "value": "2020-01-01"},
            "to": {"key": "ds", "value": "2020-12-31"}
        })
    );

    assert_eq!(
        control.table_owners(&orders).await,
        Outcome::Empty(EmptyReason::NoOwners)
    );
}

#[tokio::test]
async fn lineage_and_dashboards_over_http() {
    let (addr, catalog) = spawn_catalog().await;
    let control = control_plane(addr);
    let orders = table("orders");

    let lineage = control
        .table_lineage(&orders, Some(3), Some("upstream"))
        .await
        .found()
        .expect("lineage");
    assert_eq!(
        lineage.upstream,
        Some(json!([{"key": "hive://gold.raw/orders", "level": 1}]))
    );

    let dashboards = control
        .table_dashboards(&orders)
        .await
        .found()
        .expect("dashboards");
    assert_eq!(dashboards[0].collection_name, Some(json!("Sales Ops")));

    let requests = catalog.requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![
            "hive://gold.sales/orders/lineage?depth=3&direction=upstream".to_string(),
            "hive://gold.sales/orders/dashboard/".to_string(),
        ]
    );
}

#[tokio::test]
async fn catalog_errors_are_reported_not_emptied() {
    let (addr, _) = spawn_catalog().await;
    let control = control_plane(addr);

    let missing = control.table_owners(&table("missing")).await;
    assert!(matches!(
        missing,
        Outcome::Failed(CatalogError::Status { status: 404, .. })
    ));

    let broken = control.table_columns(&table("broken")).await;
    assert_eq!(
        serde_json::to_value(&broken).unwrap(),
        json!({ "error": "metadata backend unavailable" })
    );
}

#[tokio::test]
async fn unreachable_catalog_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("reserved addr");
    drop(listener);

    let outcome = control_plane(addr).table_columns(&table("orders")).await;
    assert!(matches!(outcome, Outcome::Failed(CatalogError::Transport(_))));
}
