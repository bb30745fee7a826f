//! HTTP transport used by the catalog client.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::CatalogError;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs a GET against a fully formed catalog URL and decodes the JSON body.
pub trait CatalogTransport: Send + Sync + 'static {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, CatalogError>> + Send;
}

/// `reqwest`-backed transport with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport whose requests expire after `timeout`.
    ///
    /// # Errors
    /// Returns `CatalogError::Transport` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CatalogError::Transport(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

impl CatalogTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<Value>().await?)
    }
}
