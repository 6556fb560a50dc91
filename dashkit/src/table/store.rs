//! Table state container

use super::ColumnHooks;
use super::SortDirection;
use super::TableAction;
use super::TableColumn;
use super::TableOptions;
use super::TableState;
use super::TableView;
use crate::error::ConfigError;
use crate::model::Row;
use crate::model::RowKey;
use crate::model::Value;

/// Owns the columns, options and state of one table.
///
/// # Example
///
/// ```
/// use dashkit::model::Row;
/// use dashkit::table::{TableColumn, TableStore};
///
/// let rows: Vec<Row> = (1..=30).map(|i| Row::new().set("id", i)).collect();
/// let mut table = TableStore::new(vec![TableColumn::new("id", "ID").sortable()]);
///
/// table.set_page(3);
/// table.set_search("2");
/// assert_eq!(table.state().current_page(), 1);
///
/// let view = table.view(&rows);
/// assert_eq!(view.filtered_total, 12);
/// ```
#[derive(Debug, Clone)]
pub struct TableStore {
    columns: Vec<TableColumn>,
    options: TableOptions,
    hooks: ColumnHooks,
    state: TableState,
}

impl TableStore {
    /// Creates a store with default options.
    pub fn new(columns: Vec<TableColumn>) -> Self {
        let state = TableState::new(&columns);
        Self {
            columns,
            options: TableOptions::default(),
            hooks: ColumnHooks::new(),
            state,
        }
    }

    /// Parses a JSON array of column definitions.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let columns: Vec<TableColumn> =
            serde_json::from_str(json).map_err(|e| ConfigError::json("table", e))?;
        Ok(Self::new(columns))
    }

    /// Sets the options; the initial page size is taken from them.
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.state = self.state.with_per_page(options.per_page);
        self.options = options;
        self
    }

    pub fn with_hooks(mut self, hooks: ColumnHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn hooks(&self) -> &ColumnHooks {
        &self.hooks
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Applies an action and returns the new state.
    pub fn dispatch(&mut self, action: TableAction) -> &TableState {
        log::debug!("Table action: {:?}", action);
        self.state = self.state.reduce(&action);
        &self.state
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Sorts by `column`; `None` for either argument clears sorting.
    pub fn set_sort(&mut self, column: Option<&str>, direction: Option<SortDirection>) {
        self.dispatch(TableAction::SetSort {
            column: column.map(str::to_string),
            direction,
        });
    }

    /// Cycles `column` through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column: &str) {
        self.dispatch(TableAction::ToggleSort {
            column: column.to_string(),
        });
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(TableAction::SetPage(page));
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.dispatch(TableAction::SetPerPage(per_page));
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.dispatch(TableAction::SetSearch(query.into()));
    }

    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.dispatch(TableAction::SetFilter {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn clear_filters(&mut self) {
        self.dispatch(TableAction::ClearFilters);
    }

    pub fn toggle_row_selection(&mut self, key: impl Into<RowKey>) {
        self.dispatch(TableAction::ToggleRow(key.into()));
    }

    /// Replaces the selection with `keys`.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = RowKey>) {
        self.dispatch(TableAction::SelectAll(keys.into_iter().collect()));
    }

    /// Selects every row in `rows` that carries a selection key.
    pub fn select_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a Row>) {
        let key = self.options.select_key.clone();
        self.select_all(rows.into_iter().filter_map(|row| row.key(&key)));
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(TableAction::ClearSelection);
    }

    pub fn set_column_width(&mut self, column: impl Into<String>, width: u32) {
        self.dispatch(TableAction::SetColumnWidth {
            column: column.into(),
            width,
        });
    }

    pub fn toggle_column_visibility(&mut self, column: impl Into<String>) {
        self.dispatch(TableAction::ToggleColumn(column.into()));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn is_column_visible(&self, column: &str) -> bool {
        self.state.is_column_visible(column)
    }

    /// Visible columns in declaration order.
    pub fn visible_columns(&self) -> Vec<&TableColumn> {
        self.columns
            .iter()
            .filter(|c| self.state.is_column_visible(&c.name))
            .collect()
    }

    /// Rows to display for the current state.
    ///
    /// In server-side mode `rows` is taken to be the current page already.
    pub fn view<'a>(&self, rows: &'a [Row]) -> TableView<'a> {
        if self.options.server_side {
            return TableView::server_page(rows, rows.len(), &self.state);
        }
        TableView::compute(rows, &self.columns, &self.state, self.options.pagination)
    }

    /// Rows of `rows` whose key is selected, in input order.
    pub fn selected_rows<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        rows.iter()
            .filter(|row| {
                row.key(&self.options.select_key)
                    .is_some_and(|key| self.state.is_selected(&key))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        (1..=5)
            .map(|i| Row::new().set("id", i).set("name", format!("Item {}", i)))
            .collect()
    }

    #[test]
    fn test_select_rows_uses_select_key() {
        let rows = vec![
            Row::new().set("sku", "a-1"),
            Row::new().set("sku", "b-2"),
            Row::new().set("other", 1),
        ];
        let mut table = TableStore::new(vec![TableColumn::new("sku", "SKU")])
            .with_options(TableOptions::default().with_select_key("sku"));
        table.select_rows(&rows);

        assert_eq!(table.state().selected().len(), 2);
        assert_eq!(table.selected_rows(&rows).len(), 2);
    }

    #[test]
    fn test_options_set_initial_page_size() {
        let table = TableStore::new(vec![TableColumn::new("id", "ID")])
            .with_options(TableOptions::default().with_per_page(2));
        let rows = rows();
        let view = table.view(&rows);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.page_count, 3);
    }

    #[test]
    fn test_server_side_view_passes_rows_through() {
        let mut table = TableStore::new(vec![TableColumn::new("id", "ID")])
            .with_options(TableOptions::default().with_server_side(true));
        table.set_search("nothing matches this");
        let rows = rows();
        assert_eq!(table.view(&rows).rows.len(), 5);
    }

    #[test]
    fn test_visible_columns_keep_declaration_order() {
        let mut table = TableStore::new(vec![
            TableColumn::new("a", "A"),
            TableColumn::new("b", "B"),
            TableColumn::new("c", "C"),
        ]);
        table.toggle_column_visibility("b");
        table.toggle_column_visibility("b");
        let names: Vec<&str> = table.visible_columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_json() {
        let table = TableStore::from_json(
            r#"[{"name": "id", "title": "ID"}, {"name": "notes", "title": "Notes", "visible": false}]"#,
        )
        .unwrap();
        assert!(table.is_column_visible("id"));
        assert!(!table.is_column_visible("notes"));
        assert!(matches!(
            TableStore::from_json("{}"),
            Err(ConfigError::Json { kind: "table", .. })
        ));
    }
}
