//! Table rows and selection keys

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::NULL;
use super::Value;

/// One record of a table's dataset.
///
/// Rows are opaque maps; the pipeline only reads the fields named by columns
/// and filters. Missing fields read as [`Value::Null`].
///
/// # Example
///
/// ```
/// use dashkit::model::{Row, Value};
///
/// let row = Row::new().set("id", 7).set("name", "Widget");
///
/// assert_eq!(row.get("name"), &Value::from("Widget"));
/// assert!(row.get("missing").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field and returns the row (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns the field value, or `Null` when absent.
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the selection key stored in `field`, if it holds one.
    pub fn key(&self, field: &str) -> Option<RowKey> {
        RowKey::from_value(self.get(field))
    }
}

impl AsRef<Row> for Row {
    fn as_ref(&self) -> &Row {
        self
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Caller-controlled identity of a row inside a selection set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    /// Numeric key.
    Int(i64),
    /// String key.
    Str(String),
}

impl RowKey {
    /// Derives a key from a cell value.
    ///
    /// Integers, integral floats and strings qualify; anything else does not.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(RowKey::Int(*i)),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(RowKey::Int(*f as i64)),
            Value::String(s) => Some(RowKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Int(i) => write!(f, "{}", i),
            RowKey::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RowKey {
    fn from(v: i64) -> Self {
        RowKey::Int(v)
    }
}

impl From<i32> for RowKey {
    fn from(v: i32) -> Self {
        RowKey::Int(v as i64)
    }
}

impl From<&str> for RowKey {
    fn from(v: &str) -> Self {
        RowKey::Str(v.to_string())
    }
}

impl From<String> for RowKey {
    fn from(v: String) -> Self {
        RowKey::Str(v)
    }
}
