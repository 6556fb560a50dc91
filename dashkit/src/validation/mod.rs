//! Field validation engine.
//!
//! Validation failures are data: every check yields either `None` or the
//! message to show next to the field. Nothing in this module panics or
//! returns `Err`.
//!
//! # Example
//!
//! ```
//! use dashkit::form::{FieldType, FormField, FormValues};
//! use dashkit::model::Value;
//! use dashkit::validation::{FieldHooks, validate_field};
//!
//! let age = FormField::new("age", "Age", FieldType::Number)
//!     .required()
//!     .min(18.0)
//!     .max(65.0);
//! let hooks = FieldHooks::new();
//! let data = FormValues::new();
//!
//! assert_eq!(
//!     validate_field(&Value::from(10), &age, &data, &hooks).as_deref(),
//!     Some("Minimum value is 18")
//! );
//! assert_eq!(validate_field(&Value::from(30), &age, &data, &hooks), None);
//! ```

mod engine;
mod file;
mod hooks;
mod rules;

pub use engine::{is_valid_email, is_valid_url, validate_all_fields, validate_field};
pub use file::{file_accepted, format_file_size};
pub use hooks::{ChangeHook, CustomOutcome, CustomValidator, FieldHooks, VisibilityPredicate};
pub use rules::{FieldValidation, ValidationRule};
