//! Headless admin dashboard toolkit
//!
//! Declarative forms and tables, a field validation engine, a pure
//! filter/sort/paginate pipeline, state containers driven by explicit
//! actions, the navigation menu model and the layout context.

pub mod error;
pub mod form;
pub mod layout;
pub mod menu;
pub mod model;
pub mod table;
pub mod validation;

pub mod prelude {
    pub use crate::form::{FieldType, FormField, FormSchema, FormStore, FormValues};
    pub use crate::layout::{LayoutContext, ThemeStorage};
    pub use crate::menu::{Menu, default_menu};
    pub use crate::model::{Row, RowKey, Value};
    pub use crate::table::{SortDirection, TableColumn, TableStore, TableView};
    pub use crate::validation::{FieldHooks, validate_field};
}
