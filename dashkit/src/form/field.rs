//! Form field definitions

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;
use crate::validation::FieldValidation;

/// Kind of input a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Switch,
    Date,
    Time,
    DatetimeLocal,
    Month,
    Week,
    File,
    Image,
    Color,
    Range,
    Custom,
}

impl FieldType {
    /// The value a field of this type starts with when it declares none.
    pub fn zero_value(self) -> Value {
        match self {
            FieldType::Checkbox | FieldType::Switch => Value::Bool(false),
            FieldType::Number | FieldType::Range => Value::Int(0),
            FieldType::File | FieldType::Image => Value::Null,
            _ => Value::String(String::new()),
        }
    }
}

/// One choice of a select, radio or checkbox group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl SelectOption {
    /// Creates an enabled option.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            group: None,
        }
    }
}

/// Whether a field is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "VisibilityRepr", into = "VisibilityRepr")]
pub enum Visibility {
    #[default]
    Always,
    Hidden,
    /// Shown while the named predicate holds for the current values.
    When(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum VisibilityRepr {
    Flag(bool),
    Predicate { when: String },
}

impl From<VisibilityRepr> for Visibility {
    fn from(repr: VisibilityRepr) -> Self {
        match repr {
            VisibilityRepr::Flag(true) => Visibility::Always,
            VisibilityRepr::Flag(false) => Visibility::Hidden,
            VisibilityRepr::Predicate { when } => Visibility::When(when),
        }
    }
}

impl From<Visibility> for VisibilityRepr {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Always => VisibilityRepr::Flag(true),
            Visibility::Hidden => VisibilityRepr::Flag(false),
            Visibility::When(when) => VisibilityRepr::Predicate { when },
        }
    }
}

/// One named input of a form.
///
/// Definitions are immutable once a form session starts. The JSON shape uses
/// camelCase keys (`defaultValue`, `maxSize`, `minLength`, ...).
///
/// # Example
///
/// ```
/// use dashkit::form::{FieldType, FormField};
///
/// let field = FormField::new("avatar", "Avatar", FieldType::Image)
///     .accept("image/*")
///     .max_size(2 * 1024 * 1024);
///
/// assert_eq!(field.max_size, Some(2 * 1024 * 1024));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub placeholder: Option<String>,
    pub default_value: Option<Value>,
    pub value: Option<Value>,

    // Layout
    /// Grid span out of 12 columns.
    pub span: Option<u8>,
    pub order: Option<i32>,

    // Validation
    pub validations: Vec<FieldValidation>,
    pub required: bool,
    pub disabled: bool,
    pub readonly: bool,

    // Select/radio/checkbox
    pub options: Vec<SelectOption>,
    pub multiple: bool,

    // File/image
    pub accept: Option<String>,
    /// Maximum size of each file in bytes.
    pub max_size: Option<u64>,
    pub max_files: Option<usize>,
    pub preview: bool,

    // Number/range
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,

    // Text
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub rows: Option<u32>,

    pub visible: Visibility,
    pub hint: Option<String>,
    pub description: Option<String>,

    /// Name of a change hook registered in [`FieldHooks`](crate::validation::FieldHooks).
    pub on_change: Option<String>,
}

impl FormField {
    /// Creates a field with the given name, label and type.
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            ..Default::default()
        }
    }

    /// The value this field starts with: default, else value, else the type's zero.
    pub fn initial_value(&self) -> Value {
        self.default_value
            .clone()
            .or_else(|| self.value.clone())
            .unwrap_or_else(|| self.field_type.zero_value())
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Appends a validation rule.
    pub fn validation(mut self, validation: impl Into<FieldValidation>) -> Self {
        self.validations.push(validation.into());
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    pub fn max_files(mut self, count: usize) -> Self {
        self.max_files = Some(count);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Runs the named change hook whenever the value changes.
    pub fn on_change(mut self, hook: impl Into<String>) -> Self {
        self.on_change = Some(hook.into());
        self
    }

    /// Shows the field only while the named predicate holds.
    pub fn visible_when(mut self, predicate: impl Into<String>) -> Self {
        self.visible = Visibility::When(predicate.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = Visibility::Hidden;
        self
    }
}

/// A titled group of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<FormField>,
    pub columns: Option<u8>,
    pub collapsible: bool,
    pub collapsed: bool,
}
