//! Forms: field definitions, the form schema, and the form state container.
//!
//! State changes are expressed as [`FormAction`]s applied by the pure
//! [`FormState::reduce`]; [`FormStore`] owns one state value and is the only
//! place that replaces it.

mod field;
mod options;
mod schema;
mod state;
mod store;

use std::collections::HashMap;

use crate::model::Value;

pub use field::{FieldType, FormField, FormSection, SelectOption, Visibility};
pub use options::{FormLayout, FormOptions};
pub use schema::FormSchema;
pub use state::{FormAction, FormState};
pub use store::FormStore;

/// Current values of a form, keyed by field name.
pub type FormValues = HashMap<String, Value>;
