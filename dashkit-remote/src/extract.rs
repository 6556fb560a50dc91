//! Pulling rows and totals out of response documents

use serde_json::Value;

use dashkit::model::Row;

use crate::AjaxConfig;
use crate::error::ApiError;

static NULL: Value = Value::Null;

/// One page of remote rows plus the server's total.
#[derive(Debug, Clone, PartialEq)]
pub struct RemotePage {
    pub rows: Vec<Row>,
    /// Total matching rows on the server, across all pages.
    pub total: usize,
}

/// Follows a dot path such as `data.items` or `results.0.rows`.
///
/// Numeric segments index into arrays.
pub fn value_at_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(document, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Extracts a page from a response document.
///
/// Rows come from `data_path`, else from a truthy top-level `data`, else
/// from the document itself. The total comes from `total_path`, else from a
/// truthy top-level `total`, else it is the number of rows.
pub fn extract_page(document: &Value, config: &AjaxConfig) -> Result<RemotePage, ApiError> {
    let data = match &config.data_path {
        Some(path) => value_at_path(document, path).unwrap_or(&NULL),
        None => document
            .get("data")
            .filter(|data| is_truthy(data))
            .unwrap_or(document),
    };

    let Value::Array(items) = data else {
        return Err(ApiError::parse_with_body(
            format!("expected an array of rows, found {}", kind(data)),
            document.to_string(),
        ));
    };

    let rows = items
        .iter()
        .map(|item| serde_json::from_value::<Row>(item.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::parse_with_body(format!("invalid row: {}", e), document.to_string()))?;

    let total = match &config.total_path {
        Some(path) => value_at_path(document, path),
        None => document.get("total").filter(|total| is_truthy(total)),
    }
    .and_then(as_count)
    .unwrap_or(rows.len());

    Ok(RemotePage { rows, total })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> AjaxConfig {
        AjaxConfig::new("http://localhost/api")
    }

    #[test]
    fn test_default_shape() {
        let document = json!({"data": [{"id": 1}, {"id": 2}], "total": 40});
        let page = extract_page(&document, &config()).unwrap();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total, 40);
    }

    #[test]
    fn test_bare_array_counts_rows() {
        let document = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let page = extract_page(&document, &config()).unwrap();
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_zero_total_falls_back_to_row_count() {
        let document = json!({"data": [{"id": 1}], "total": 0});
        assert_eq!(extract_page(&document, &config()).unwrap().total, 1);
    }

    #[test]
    fn test_dot_paths() {
        let document = json!({"result": {"items": [{"id": "a"}], "meta": {"count": "7"}}});
        let config = config().data_path("result.items").total_path("result.meta.count");
        let page = extract_page(&document, &config).unwrap();
        assert_eq!(page.rows[0].get("id").as_str(), Some("a"));
        assert_eq!(page.total, 7);
    }

    #[test]
    fn test_path_with_array_index() {
        let document = json!({"pages": [{"rows": [{"id": 1}]}]});
        assert_eq!(
            value_at_path(&document, "pages.0.rows").map(|v| v.is_array()),
            Some(true)
        );
        assert!(value_at_path(&document, "pages.9.rows").is_none());
    }

    #[test]
    fn test_missing_rows_is_parse_error() {
        let document = json!({"result": {}});
        let err = extract_page(&document, &config().data_path("result.items")).unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
        assert!(err.body().is_some());
    }

    #[test]
    fn test_non_object_row_is_parse_error() {
        let document = json!({"data": [1, 2]});
        assert!(matches!(
            extract_page(&document, &config()),
            Err(ApiError::Parse { .. })
        ));
    }
}
