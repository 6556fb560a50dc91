//! Column and filter definitions

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// How a column's values are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    Badge,
    Avatar,
    Custom,
}

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    /// The alignment class applied to every cell of the column.
    pub fn class(self) -> &'static str {
        match self {
            ColumnAlign::Left => "text-left",
            ColumnAlign::Center => "text-center",
            ColumnAlign::Right => "text-right",
        }
    }
}

/// A table column.
///
/// `formatter`, `style`, `cell_class` and `badge_variant` name callbacks
/// registered in [`ColumnHooks`](super::ColumnHooks).
///
/// # Example
///
/// ```
/// use dashkit::table::{ColumnAlign, ColumnType, TableColumn};
///
/// let price = TableColumn::new("price", "Price")
///     .column_type(ColumnType::Number)
///     .align(ColumnAlign::Right)
///     .sortable();
///
/// assert!(price.searchable);
/// assert!(price.visible);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableColumn {
    /// Row field this column reads.
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub width: Option<String>,
    pub min_width: Option<String>,
    pub align: ColumnAlign,
    pub sortable: bool,
    pub searchable: bool,
    pub resizable: bool,
    pub visible: bool,
    pub formatter: Option<String>,
    pub style: Option<String>,
    pub cell_class: Option<String>,
    pub badge_variant: Option<String>,
}

impl Default for TableColumn {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            column_type: ColumnType::Text,
            width: None,
            min_width: None,
            align: ColumnAlign::Left,
            sortable: false,
            searchable: true,
            resizable: false,
            visible: true,
            formatter: None,
            style: None,
            cell_class: None,
            badge_variant: None,
        }
    }
}

impl TableColumn {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Excludes the column from global search.
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Starts the column hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn formatter(mut self, name: impl Into<String>) -> Self {
        self.formatter = Some(name.into());
        self
    }

    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = Some(name.into());
        self
    }

    pub fn cell_class(mut self, name: impl Into<String>) -> Self {
        self.cell_class = Some(name.into());
        self
    }

    pub fn badge_variant(mut self, name: impl Into<String>) -> Self {
        self.badge_variant = Some(name.into());
        self
    }
}

/// Input kind of a declared filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Text,
    Select,
    Date,
    Daterange,
}

/// One choice of a select filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: Value,
}

/// A filter offered above the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFilter {
    /// Row field the filter applies to.
    pub name: String,
    pub label: String,
    #[serde(default, rename = "type")]
    pub kind: FilterKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FilterOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TableFilter {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            placeholder: None,
        }
    }

    pub fn option(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push(FilterOption {
            label: label.into(),
            value: value.into(),
        });
        self
    }
}
