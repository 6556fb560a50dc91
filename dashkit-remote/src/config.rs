//! Remote data source configuration

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use dashkit::error::ConfigError;

/// HTTP method used to fetch table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Parameters go in the query string.
    #[default]
    Get,
    /// Parameters go in a JSON body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Where and how to fetch remote table data.
///
/// # Example
///
/// ```
/// use dashkit_remote::{AjaxConfig, HttpMethod};
///
/// let config = AjaxConfig::new("https://example.com/api/orders")
///     .method(HttpMethod::Post)
///     .param("status", "open")
///     .header("X-Tenant", "acme")
///     .data_path("result.items")
///     .total_path("result.count");
///
/// assert_eq!(config.params["status"], "open");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AjaxConfig {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub params: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Dot path to the rows, e.g. `data.items`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
    /// Dot path to the total row count, e.g. `data.total`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_path: Option<String>,
}

impl AjaxConfig {
    /// Creates a GET configuration for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            params: BTreeMap::new(),
            headers: BTreeMap::new(),
            data_path: None,
            total_path: None,
        }
    }

    /// Parses a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::json("ajax", e))
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Adds parameters, replacing any with the same name.
    pub fn params<I, K>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    pub fn total_path(mut self, path: impl Into<String>) -> Self {
        self.total_path = Some(path.into());
        self
    }
}

/// Renders a parameter for a query string.
///
/// Strings are used verbatim, arrays are comma-joined and everything else
/// uses its JSON text.
pub(crate) fn param_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(param_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let config = AjaxConfig::from_json(
            r#"{"url": "/api/products", "method": "POST", "params": {"page": 1}, "dataPath": "data.items"}"#,
        )
        .unwrap();
        assert_eq!(config.method, HttpMethod::Post);
        assert_eq!(config.params["page"], json!(1));
        assert_eq!(config.data_path.as_deref(), Some("data.items"));
        assert!(config.total_path.is_none());
    }

    #[test]
    fn test_from_json_requires_url() {
        assert!(matches!(
            AjaxConfig::from_json(r#"{"method": "GET"}"#),
            Err(ConfigError::Json { kind: "ajax", .. })
        ));
    }

    #[test]
    fn test_param_text() {
        assert_eq!(param_text(&json!("a b")), "a b");
        assert_eq!(param_text(&json!(2.5)), "2.5");
        assert_eq!(param_text(&json!(true)), "true");
        assert_eq!(param_text(&json!(null)), "null");
        assert_eq!(param_text(&json!(["x", 1])), "x,1");
    }
}
