//! Value enum for dynamic field and cell values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::FileInfo;

/// Shared null returned for absent fields.
pub(crate) static NULL: Value = Value::Null;

/// A dynamic value held by a form field or a table cell.
///
/// Rows coming from JSON map onto the primitive variants; objects that are not
/// otherwise understood are kept verbatim in [`Value::Json`].
///
/// # Example
///
/// ```
/// use dashkit::model::Value;
///
/// let name = Value::from("Contoso");
/// let stock = Value::from(12);
/// let empty = Value::Null;
///
/// assert_eq!(name.to_text(), "Contoso");
/// assert!(stock.is_truthy());
/// assert!(!empty.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
    /// Point in time.
    DateTime(DateTime<Utc>),
    /// Sequence of values (multi-selects, list filters).
    List(Vec<Value>),
    /// A single picked file.
    File(FileInfo),
    /// Several picked files.
    Files(Vec<FileInfo>),
    /// Fallback for JSON objects.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for `Null` and the empty string.
    ///
    /// This is the emptiness a `required` field rejects.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `false` for null, `false`, zero, NaN and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Json(json) => match json {
                serde_json::Value::Null => false,
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                serde_json::Value::String(s) => !s.is_empty(),
                _ => true,
            },
            Value::DateTime(_) | Value::List(_) | Value::File(_) | Value::Files(_) => true,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::File(_) => "file",
            Value::Files(_) => "files",
            Value::Json(_) => "json",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is an `Int` or `Float`.
    ///
    /// Strings are not coerced; see [`Value::to_number`] for that.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a number, parsing numeric strings.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::String(s) => s.trim().parse::<f64>().ok(),
            other => other.as_f64(),
        }
    }

    /// Returns the instant this value denotes.
    ///
    /// Accepts native date-times, RFC 3339 strings, `YYYY-MM-DD` dates,
    /// `YYYY-MM-DDTHH:MM[:SS]` local date-times (read as UTC) and integers
    /// as milliseconds since the Unix epoch.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            Value::Int(millis) => Utc.timestamp_millis_opt(*millis).single(),
            Value::String(s) => parse_datetime(s.trim()),
            _ => None,
        }
    }

    /// Renders the value as plain text.
    ///
    /// `Null` renders empty, lists and file lists are comma-joined and
    /// integral floats drop their fractional part.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => float_text(*f),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::List(items) => items
                .iter()
                .map(Value::to_text)
                .collect::<Vec<_>>()
                .join(","),
            Value::File(file) => file.name.clone(),
            Value::Files(files) => files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(","),
            Value::Json(serde_json::Value::String(s)) => s.clone(),
            Value::Json(json) => json.to_string(),
        }
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        f.to_string()
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// =============================================================================
// Serde
// =============================================================================

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            object @ serde_json::Value::Object(_) => Value::Json(object),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<FileInfo> for Value {
    fn from(v: FileInfo) -> Self {
        Value::File(v)
    }
}

impl From<Vec<FileInfo>> for Value {
    fn from(v: Vec<FileInfo>) -> Self {
        Value::Files(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::List(vec![]).is_truthy());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::from(2.0).to_text(), "2");
        assert_eq!(Value::from(2.5).to_text(), "2.5");
        assert_eq!(Value::from(vec![Value::from("a"), Value::from(1)]).to_text(), "a,1");
    }

    #[test]
    fn test_from_json() {
        let value: Value = serde_json::from_str(r#"[1, 2.5, "x", null, {"a": 1}]"#).unwrap();
        let Value::List(items) = value else {
            panic!("expected list");
        };
        assert_eq!(items[0], Value::Int(1));
        assert_eq!(items[1], Value::Float(2.5));
        assert_eq!(items[2], Value::from("x"));
        assert_eq!(items[3], Value::Null);
        assert_eq!(items[4].type_name(), "json");
    }

    #[test]
    fn test_as_datetime() {
        let date = Value::from("2024-03-05").as_datetime().unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T00:00:00+00:00");
        let instant = Value::from("2024-03-05T10:30:00Z").as_datetime().unwrap();
        assert!(instant > date);
        assert!(Value::from("not a date").as_datetime().is_none());
    }

    #[test]
    fn test_to_number_coerces_strings() {
        assert_eq!(Value::from(" 42 ").to_number(), Some(42.0));
        assert_eq!(Value::from(" 42 ").as_f64(), None);
        assert_eq!(Value::from("abc").to_number(), None);
    }
}
