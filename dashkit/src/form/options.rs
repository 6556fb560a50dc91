//! Form behaviour options

use serde::Deserialize;
use serde::Serialize;

/// Label placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Behaviour and presentation options for a form.
///
/// # Example
///
/// ```
/// use dashkit::form::FormOptions;
///
/// let options = FormOptions::default()
///     .with_validate_on_change(true)
///     .with_submit_text("Save");
///
/// assert!(options.validate_on_submit);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOptions {
    /// Validate a field every time its value changes.
    ///
    /// Default: false
    pub validate_on_change: bool,

    /// Validate a field when it is touched.
    ///
    /// Default: false
    pub validate_on_blur: bool,

    /// Validate the whole form on submit.
    ///
    /// Default: true
    pub validate_on_submit: bool,

    pub layout: FormLayout,
    pub columns: u8,
    pub submit_text: String,
    pub reset_text: String,
    pub cancel_text: String,
    pub show_reset: bool,
    pub show_cancel: bool,
    pub loading_text: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_on_change: false,
            validate_on_blur: false,
            validate_on_submit: true,
            layout: FormLayout::Vertical,
            columns: 1,
            submit_text: "Submit".to_string(),
            reset_text: "Reset".to_string(),
            cancel_text: "Cancel".to_string(),
            show_reset: false,
            show_cancel: false,
            loading_text: "Submitting...".to_string(),
        }
    }
}

impl FormOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    pub fn with_validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    pub fn with_validate_on_submit(mut self, enabled: bool) -> Self {
        self.validate_on_submit = enabled;
        self
    }

    pub fn with_layout(mut self, layout: FormLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = text.into();
        self
    }
}
