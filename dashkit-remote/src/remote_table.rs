//! Server-side tables with last-request-wins loading

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use dashkit::table::TableState;

use crate::AjaxConfig;
use crate::RemotePage;
use crate::RequestTracker;
use crate::TableDataClient;
use crate::error::ApiError;
use crate::extract_page;

/// Reshapes a raw response document before rows and total are extracted.
pub type ResponseTransform = Arc<dyn Fn(serde_json::Value) -> serde_json::Value + Send + Sync>;

/// Something that can answer a request configuration with a JSON document.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_document(&self, config: &AjaxConfig) -> Result<serde_json::Value, ApiError>;
}

#[async_trait]
impl RowSource for TableDataClient {
    async fn fetch_document(&self, config: &AjaxConfig) -> Result<serde_json::Value, ApiError> {
        self.fetch_json(config).await
    }
}

/// Query parameters describing `state` to a server.
///
/// Always sends `page` and `perPage`; `search` only when non-empty and
/// `sortBy`/`sortDir` only while sorted.
pub fn server_params(state: &TableState) -> BTreeMap<String, serde_json::Value> {
    let mut params = BTreeMap::new();
    params.insert("page".to_string(), state.current_page().into());
    params.insert("perPage".to_string(), state.per_page().into());

    if !state.search().is_empty() {
        params.insert("search".to_string(), state.search().into());
    }
    if let Some(sort) = state.sort() {
        params.insert("sortBy".to_string(), sort.column.as_str().into());
        params.insert("sortDir".to_string(), sort.direction.as_str().into());
    }

    params
}

/// A table whose rows live on a server.
///
/// Loads may overlap; only the most recently started one delivers its page.
/// An older load that finishes later yields `Ok(None)` and its response,
/// successful or not, is dropped.
///
/// # Example
///
/// ```ignore
/// let table = RemoteTable::new(client, AjaxConfig::new(url));
/// if let Some(page) = table.load(store.state()).await? {
///     let view = TableView::server_page(&page.rows, page.total, store.state());
/// }
/// ```
pub struct RemoteTable<S = TableDataClient> {
    source: S,
    config: AjaxConfig,
    tracker: RequestTracker,
    transform: Option<ResponseTransform>,
}

impl<S: fmt::Debug> fmt::Debug for RemoteTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteTable")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

impl<S: RowSource> RemoteTable<S> {
    pub fn new(source: S, config: AjaxConfig) -> Self {
        Self {
            source,
            config,
            tracker: RequestTracker::new(),
            transform: None,
        }
    }

    /// Reshapes every response with `transform` before extraction.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(serde_json::Value) -> serde_json::Value + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// The base configuration; table parameters are merged into it per load.
    pub fn config(&self) -> &AjaxConfig {
        &self.config
    }

    /// Fetches the page `state` asks for.
    pub async fn load(&self, state: &TableState) -> Result<Option<RemotePage>, ApiError> {
        let token = self.tracker.issue();
        let config = self
            .config
            .clone()
            .params(server_params(state));

        log::debug!("Loading remote page {} ({:?})", state.current_page(), token);
        let result = self.source.fetch_document(&config).await;

        if !self.tracker.is_current(token) {
            log::debug!("Discarding stale response for {:?}", token);
            return Ok(None);
        }

        let document = match &self.transform {
            Some(transform) => transform(result?),
            None => result?,
        };
        extract_page(&document, &config).map(Some)
    }
}
