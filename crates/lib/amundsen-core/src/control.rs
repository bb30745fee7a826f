use std::sync::Arc;

use amundsen_models::schema::DEFAULT_LINEAGE_DEPTH;
use amundsen_models::{
    ColumnMetadata,
    DashboardRef,
    DateRange,
    Lineage,
    LineageDirection,
    TableRef,
};
use serde_json::Value;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::normalize;
use crate::outcome::Outcome;
use crate::transport::CatalogTransport;

/// Composes one catalog fetch with one normalizer per tool call.
pub struct CatalogControlPlane<T: CatalogTransport> {
    client: CatalogClient<T>,
}

impl<T: CatalogTransport> Clone for CatalogControlPlane<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<T: CatalogTransport> CatalogControlPlane<T> {
    #[must_use]
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_client(CatalogClient::new(base_url, transport))
    }

    #[must_use]
    pub fn from_arc(base_url: &str, transport: Arc<T>) -> Self {
        Self::with_client(CatalogClient::from_arc(base_url, transport))
    }

    #[must_use]
    pub const fn with_client(client: CatalogClient<T>) -> Self {
        Self { client }
    }

    pub async fn table_columns(&self, table: &TableRef) -> Outcome<ColumnMetadata> {
        Outcome::from(self.client.fetch_metadata(table).await)
            .and_then(|raw| normalize::extract_columns(&raw))
    }

    pub async fn table_date_range(&self, table: &TableRef) -> Outcome<DateRange> {
        Outcome::from(self.client.fetch_metadata(table).await)
            .and_then(|raw| normalize::extract_date_range(&raw))
    }

    pub async fn table_owners(&self, table: &TableRef) -> Outcome<Vec<Value>> {
        Outcome::from(self.client.fetch_metadata(table).await)
            .and_then(|raw| normalize::extract_owners(&raw))
    }

    /// Lineage around a table. `depth` defaults to 1 and `direction` to `both`;
    /// both are validated before any request is sent.
    pub async fn table_lineage(
        &self,
        table: &TableRef,
        depth: Option<u32>,
        direction: Option<&str>,
    ) -> Outcome<Lineage> {
        let direction = match direction.map(str::parse::<LineageDirection>).transpose() {
            Ok(direction) => direction.unwrap_or_default(),
            Err(err) => return Outcome::Failed(CatalogError::from(err)),
        };
        let depth = depth.unwrap_or(DEFAULT_LINEAGE_DEPTH);
        Outcome::from(self.client.fetch_lineage(table, depth, direction).await)
            .and_then(|raw| normalize::extract_lineage(&raw))
    }

    pub async fn table_dashboards(&self, table: &TableRef) -> Outcome<Vec<DashboardRef>> {
        Outcome::from(self.client.fetch_dashboards(table).await)
            .and_then(|raw| normalize::extract_dashboards(&raw))
    }
}
