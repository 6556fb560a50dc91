//! Table state and its transitions

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use super::TableColumn;
use crate::model::RowKey;
use crate::model::Value;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The active sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

/// A change to a table's state.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Sort by a column; `None` direction (or `None` column) clears sorting.
    SetSort {
        column: Option<String>,
        direction: Option<SortDirection>,
    },
    /// Cycle a column through ascending, descending and unsorted.
    ToggleSort { column: String },
    SetPage(usize),
    SetPerPage(usize),
    SetSearch(String),
    SetFilter { name: String, value: Value },
    /// Drop all filters and the search query.
    ClearFilters,
    ToggleRow(RowKey),
    /// Replace the selection with exactly these keys.
    SelectAll(Vec<RowKey>),
    ClearSelection,
    SetColumnWidth { column: String, width: u32 },
    ToggleColumn(String),
}

/// Snapshot of a table session.
///
/// `current_page` is 1-based and returns to 1 whenever the search, a
/// filter or the page size changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    sort: Option<SortSpec>,
    current_page: usize,
    per_page: usize,
    search: String,
    filters: HashMap<String, Value>,
    selected: HashSet<RowKey>,
    column_widths: HashMap<String, u32>,
    visible_columns: HashSet<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: None,
            current_page: 1,
            per_page: 10,
            search: String::new(),
            filters: HashMap::new(),
            selected: HashSet::new(),
            column_widths: HashMap::new(),
            visible_columns: HashSet::new(),
        }
    }
}

impl TableState {
    /// Creates the initial state for `columns`.
    ///
    /// Every column not marked hidden starts visible.
    pub fn new(columns: &[TableColumn]) -> Self {
        Self {
            visible_columns: columns
                .iter()
                .filter(|c| c.visible)
                .map(|c| c.name.clone())
                .collect(),
            ..Self::default()
        }
    }

    /// Sets the initial page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Applies `action`, returning the next state.
    pub fn reduce(&self, action: &TableAction) -> Self {
        let mut next = self.clone();

        match action {
            TableAction::SetSort { column, direction } => {
                next.sort = match (column, direction) {
                    (Some(column), Some(direction)) => Some(SortSpec {
                        column: column.clone(),
                        direction: *direction,
                    }),
                    _ => None,
                };
            }
            TableAction::ToggleSort { column } => {
                next.sort = match &self.sort {
                    Some(spec) if &spec.column == column => match spec.direction {
                        SortDirection::Asc => Some(SortSpec {
                            column: column.clone(),
                            direction: SortDirection::Desc,
                        }),
                        SortDirection::Desc => None,
                    },
                    _ => Some(SortSpec {
                        column: column.clone(),
                        direction: SortDirection::Asc,
                    }),
                };
            }
            TableAction::SetPage(page) => {
                next.current_page = *page;
            }
            TableAction::SetPerPage(per_page) => {
                next.per_page = *per_page;
                next.current_page = 1;
            }
            TableAction::SetSearch(query) => {
                next.search = query.clone();
                next.current_page = 1;
            }
            TableAction::SetFilter { name, value } => {
                next.filters.insert(name.clone(), value.clone());
                next.current_page = 1;
            }
            TableAction::ClearFilters => {
                next.filters.clear();
                next.search.clear();
                next.current_page = 1;
            }
            TableAction::ToggleRow(key) => {
                if !next.selected.remove(key) {
                    next.selected.insert(key.clone());
                }
            }
            TableAction::SelectAll(keys) => {
                next.selected = keys.iter().cloned().collect();
            }
            TableAction::ClearSelection => {
                next.selected.clear();
            }
            TableAction::SetColumnWidth { column, width } => {
                next.column_widths.insert(column.clone(), *width);
            }
            TableAction::ToggleColumn(column) => {
                if !next.visible_columns.remove(column) {
                    next.visible_columns.insert(column.clone());
                }
            }
        }

        next
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &HashMap<String, Value> {
        &self.filters
    }

    pub fn selected(&self) -> &HashSet<RowKey> {
        &self.selected
    }

    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    pub fn column_width(&self, column: &str) -> Option<u32> {
        self.column_widths.get(column).copied()
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        self.visible_columns.contains(column)
    }
}
