//! Named per-column callbacks

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::TableColumn;
use crate::model::Row;
use crate::model::Value;

/// Visual variant of a badge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

/// Produces text for a cell: formatter, inline style or extra classes.
pub type CellText = Arc<dyn Fn(&Value, &Row, &TableColumn) -> String + Send + Sync>;

/// Picks a badge variant for a cell.
pub type BadgeSelector = Arc<dyn Fn(&Value, &Row) -> BadgeVariant + Send + Sync>;

/// Registry of named column callbacks.
///
/// # Example
///
/// ```
/// use dashkit::table::{BadgeVariant, ColumnHooks};
///
/// let hooks = ColumnHooks::new()
///     .with_formatter("currency", |value, _row, _column| {
///         format!("${:.2}", value.as_f64().unwrap_or(0.0))
///     })
///     .with_badge_variant("status", |value, _row| match value.as_str() {
///         Some("published") => BadgeVariant::Success,
///         _ => BadgeVariant::Warning,
///     });
///
/// assert!(hooks.formatter("currency").is_some());
/// ```
#[derive(Clone, Default)]
pub struct ColumnHooks {
    formatters: HashMap<String, CellText>,
    styles: HashMap<String, CellText>,
    classes: HashMap<String, CellText>,
    badges: HashMap<String, BadgeSelector>,
}

impl ColumnHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter<F>(mut self, name: impl Into<String>, formatter: F) -> Self
    where
        F: Fn(&Value, &Row, &TableColumn) -> String + Send + Sync + 'static,
    {
        self.formatters.insert(name.into(), Arc::new(formatter));
        self
    }

    pub fn with_style<F>(mut self, name: impl Into<String>, style: F) -> Self
    where
        F: Fn(&Value, &Row, &TableColumn) -> String + Send + Sync + 'static,
    {
        self.styles.insert(name.into(), Arc::new(style));
        self
    }

    pub fn with_cell_class<F>(mut self, name: impl Into<String>, class: F) -> Self
    where
        F: Fn(&Value, &Row, &TableColumn) -> String + Send + Sync + 'static,
    {
        self.classes.insert(name.into(), Arc::new(class));
        self
    }

    pub fn with_badge_variant<F>(mut self, name: impl Into<String>, selector: F) -> Self
    where
        F: Fn(&Value, &Row) -> BadgeVariant + Send + Sync + 'static,
    {
        self.badges.insert(name.into(), Arc::new(selector));
        self
    }

    pub fn formatter(&self, name: &str) -> Option<&CellText> {
        self.formatters.get(name)
    }

    pub fn style(&self, name: &str) -> Option<&CellText> {
        self.styles.get(name)
    }

    pub fn cell_class(&self, name: &str) -> Option<&CellText> {
        self.classes.get(name)
    }

    pub fn badge_variant(&self, name: &str) -> Option<&BadgeSelector> {
        self.badges.get(name)
    }
}

impl fmt::Debug for ColumnHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnHooks")
            .field("formatters", &self.formatters.keys().collect::<Vec<_>>())
            .field("styles", &self.styles.keys().collect::<Vec<_>>())
            .field("classes", &self.classes.keys().collect::<Vec<_>>())
            .field("badges", &self.badges.keys().collect::<Vec<_>>())
            .finish()
    }
}
