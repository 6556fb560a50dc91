//! Tables: column definitions, the transform pipeline, cell formatting and
//! the table state container.

mod column;
mod format;
mod hooks;
mod options;
pub mod pipeline;
mod state;
mod store;

pub use column::{ColumnAlign, ColumnType, FilterKind, FilterOption, TableColumn, TableFilter};
pub use format::{badge_variant, cell_class, cell_style, format_date, format_number, format_value};
pub use hooks::{BadgeSelector, BadgeVariant, CellText, ColumnHooks};
pub use options::TableOptions;
pub use pipeline::{SortKey, TableView, filter_rows, paginate, sort_rows};
pub use state::{SortDirection, SortSpec, TableAction, TableState};
pub use store::TableStore;
