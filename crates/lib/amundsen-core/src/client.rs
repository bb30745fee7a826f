//! Catalog client: builds resource URLs and issues lookups.

use std::sync::Arc;

use amundsen_models::schema::{DASHBOARD_PATH, LINEAGE_PATH, TABLE_PATH};
use amundsen_models::{LineageDirection, TableRef};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::transport::CatalogTransport;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Raw catalog payload for one resource, left untyped on purpose.
pub type RawCatalogResponse = Value;

pub struct CatalogClient<T: CatalogTransport> {
    base_url: Arc<str>,
    transport: Arc<T>,
}

impl<T: CatalogTransport> Clone for CatalogClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: CatalogTransport> CatalogClient<T> {
    #[must_use]
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::from_arc(base_url, Arc::new(transport))
    }

    #[must_use]
    pub fn from_arc(base_url: &str, transport: Arc<T>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim().trim_end_matches('/')),
            transport,
        }
    }

    /// URL of the table resource, `{base}/table/{database}://gold.{schema}/{table}`.
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidArgument` if any component of `table` is blank.
    pub fn table_url(&self, table: &TableRef) -> Result<String, CatalogError> {
        table.validate()?;
        Ok(format!("{}/{TABLE_PATH}/{}", self.base_url, table.resource_id()))
    }

    /// Fetches the full metadata document for a table.
    ///
    /// # Errors
    /// Returns `CatalogError` if the reference is invalid or the request fails.
    pub async fn fetch_metadata(
        &self,
        table: &TableRef,
    ) -> Result<RawCatalogResponse, CatalogError> {
        let url = self.table_url(table)?;
        self.get(&url).await
    }

    /// Fetches the unprocessed lineage payload for a table.
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidDepth` for a zero depth, before any request
    /// is issued, or the underlying request failure.
    pub async fn fetch_lineage(
        &self,
        table: &TableRef,
        depth: u32,
        direction: LineageDirection,
    ) -> Result<RawCatalogResponse, CatalogError> {
        if depth == 0 {
            return Err(CatalogError::InvalidDepth(depth));
        }
        let base = self.table_url(table)?;
        let url = format!("{base}/{LINEAGE_PATH}?depth={depth}&direction={direction}");
        self.get(&url).await
    }

    /// Fetches the dashboards built on a table.
    ///
    /// # Errors
    /// Returns `CatalogError` if the reference is invalid or the request fails.
    pub async fn fetch_dashboards(
        &self,
        table: &TableRef,
    ) -> Result<RawCatalogResponse, CatalogError> {
        let base = self.table_url(table)?;
        let url = format!("{base}/{DASHBOARD_PATH}");
        self.get(&url).await
    }

    async fn get(&self, url: &str) -> Result<RawCatalogResponse, CatalogError> {
        debug!(%url, "requesting catalog resource");
        let result = self.transport.get_json(url).await;
        if let Err(err) = &result {
            warn!(%url, error = %err, "catalog request failed");
        }
        result
    }
}
