//! HTTP client for remote table data

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::AjaxConfig;
use crate::HttpMethod;
use crate::RemotePage;
use crate::config::param_text;
use crate::error::ApiError;
use crate::extract::extract_page;

/// Fetches table data described by an [`AjaxConfig`].
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks. Requests are sent once; there is no retry and no timeout
/// unless one is configured.
///
/// # Example
///
/// ```ignore
/// use dashkit_remote::{AjaxConfig, TableDataClient};
///
/// let client = TableDataClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.fetch(&AjaxConfig::new("https://example.com/api/products")).await?;
/// println!("{} of {}", page.rows.len(), page.total);
/// ```
#[derive(Clone)]
pub struct TableDataClient {
    inner: Arc<TableDataClientInner>,
}

struct TableDataClientInner {
    http_client: Client,
    timeout: Option<Duration>,
}

impl TableDataClient {
    /// Creates a client with default settings.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> TableDataClientBuilder {
        TableDataClientBuilder::new()
    }

    /// Fetches one page of rows.
    pub async fn fetch(&self, config: &AjaxConfig) -> Result<RemotePage, ApiError> {
        self.fetch_with(config, |document| document).await
    }

    /// Fetches one page of rows, reshaping the response with `transform`
    /// before rows and total are extracted.
    pub async fn fetch_with<F>(&self, config: &AjaxConfig, transform: F) -> Result<RemotePage, ApiError>
    where
        F: FnOnce(serde_json::Value) -> serde_json::Value,
    {
        let document = self.fetch_json(config).await?;
        let page = extract_page(&transform(document), config)?;
        log::debug!(
            "Fetched {} rows (total {}) from {}",
            page.rows.len(),
            page.total,
            config.url
        );
        Ok(page)
    }

    /// Sends the request and parses the response body as JSON.
    pub async fn fetch_json(&self, config: &AjaxConfig) -> Result<serde_json::Value, ApiError> {
        let mut url = Url::parse(&config.url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        let mut request = match config.method {
            HttpMethod::Get => {
                if !config.params.is_empty() {
                    url.query_pairs_mut().extend_pairs(
                        config
                            .params
                            .iter()
                            .map(|(name, value)| (name.as_str(), param_text(value))),
                    );
                }
                log::info!("GET {}", url);
                self.inner.http_client.get(url)
            }
            HttpMethod::Post => {
                log::info!("POST {}", url);
                self.inner.http_client.post(url).json(&config.params)
            }
        };

        request = request.header(CONTENT_TYPE, "application/json");
        for (name, value) in &config.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("Table data request failed with HTTP {}", status.as_u16());
            return Err(ApiError::http(
                status.as_u16(),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }
}

impl std::fmt::Debug for TableDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableDataClient")
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing a [`TableDataClient`].
///
/// # Example
///
/// ```ignore
/// let client = TableDataClient::builder()
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
#[derive(Default)]
pub struct TableDataClientBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl TableDataClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`TableDataClient`].
    pub fn build(self) -> Result<TableDataClient, ApiError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(TableDataClient {
            inner: Arc::new(TableDataClientInner {
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
