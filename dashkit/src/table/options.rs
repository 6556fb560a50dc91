//! Table behaviour options

use serde::Deserialize;
use serde::Serialize;

use super::TableFilter;

/// Behaviour options for a table.
///
/// # Example
///
/// ```
/// use dashkit::table::TableOptions;
///
/// let options = TableOptions::default()
///     .with_selectable(true)
///     .with_per_page(25);
///
/// assert_eq!(options.select_key, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Rows can be selected.
    ///
    /// Default: false
    pub selectable: bool,

    /// Row field used as the selection key.
    ///
    /// Default: "id"
    pub select_key: String,

    pub filters: Vec<TableFilter>,

    /// Global search box is offered.
    ///
    /// Default: true
    pub searchable: bool,

    pub search_placeholder: String,

    /// Paginate rows.
    ///
    /// Default: true
    pub pagination: bool,

    /// Initial page size.
    ///
    /// Default: 10
    pub per_page: usize,

    pub per_page_options: Vec<usize>,

    /// Sorting, filtering and paging happen on the server.
    ///
    /// Default: false
    pub server_side: bool,

    /// Columns can be shown and hidden.
    ///
    /// Default: true
    pub column_visibility: bool,

    pub loading_text: String,
    pub empty_text: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selectable: false,
            select_key: "id".to_string(),
            filters: Vec::new(),
            searchable: true,
            search_placeholder: "Search...".to_string(),
            pagination: true,
            per_page: 10,
            per_page_options: vec![10, 25, 50, 100],
            server_side: false,
            column_visibility: true,
            loading_text: "Loading...".to_string(),
            empty_text: "No data available".to_string(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_select_key(mut self, key: impl Into<String>) -> Self {
        self.select_key = key.into();
        self
    }

    pub fn with_filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_server_side(mut self, server_side: bool) -> Self {
        self.server_side = server_side;
        self
    }
}
