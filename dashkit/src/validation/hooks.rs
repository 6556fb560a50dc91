//! Named per-field callbacks.
//!
//! Forms are plain data, so anything executable a field refers to (custom
//! validators, change hooks, visibility predicates) is registered here under
//! a name and looked up when needed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::form::FormValues;
use crate::model::Value;

/// Result of a custom validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomOutcome {
    /// The value is acceptable.
    Pass,
    /// The value is rejected; the rule's message (or a generic one) is used.
    Fail,
    /// The value is rejected with this message.
    Message(String),
}

impl From<bool> for CustomOutcome {
    fn from(ok: bool) -> Self {
        if ok { Self::Pass } else { Self::Fail }
    }
}

impl From<String> for CustomOutcome {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for CustomOutcome {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Option<String>> for CustomOutcome {
    fn from(message: Option<String>) -> Self {
        message.map_or(Self::Pass, Self::Message)
    }
}

/// Custom validator: receives the value and the whole form.
pub type CustomValidator = Arc<dyn Fn(&Value, &FormValues) -> CustomOutcome + Send + Sync>;

/// Change hook: receives the new value and the form after the change.
pub type ChangeHook = Arc<dyn Fn(&Value, &FormValues) + Send + Sync>;

/// Visibility predicate evaluated against the current form values.
pub type VisibilityPredicate = Arc<dyn Fn(&FormValues) -> bool + Send + Sync>;

/// Registry of named field callbacks.
///
/// # Example
///
/// ```
/// use dashkit::validation::FieldHooks;
///
/// let hooks = FieldHooks::new()
///     .with_validator("even", |value, _form| {
///         value.as_f64().is_some_and(|n| n % 2.0 == 0.0)
///     })
///     .with_visibility("has_company", |form| {
///         form.get("company").is_some_and(|v| v.is_truthy())
///     });
///
/// assert!(hooks.validator("even").is_some());
/// ```
#[derive(Clone, Default)]
pub struct FieldHooks {
    validators: HashMap<String, CustomValidator>,
    change_hooks: HashMap<String, ChangeHook>,
    visibility: HashMap<String, VisibilityPredicate>,
}

impl FieldHooks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom validator.
    ///
    /// The closure may return `bool`, a message `String`, or an
    /// `Option<String>` (`None` meaning pass).
    pub fn with_validator<F, R>(mut self, name: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&Value, &FormValues) -> R + Send + Sync + 'static,
        R: Into<CustomOutcome>,
    {
        let validator: CustomValidator =
            Arc::new(move |value: &Value, form: &FormValues| validator(value, form).into());
        self.validators.insert(name.into(), validator);
        self
    }

    /// Registers a change hook.
    pub fn with_change_hook<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(&Value, &FormValues) + Send + Sync + 'static,
    {
        self.change_hooks.insert(name.into(), Arc::new(hook));
        self
    }

    /// Registers a visibility predicate.
    pub fn with_visibility<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.visibility.insert(name.into(), Arc::new(predicate));
        self
    }

    /// Looks up a custom validator.
    pub fn validator(&self, name: &str) -> Option<&CustomValidator> {
        self.validators.get(name)
    }

    /// Looks up a change hook.
    pub fn change_hook(&self, name: &str) -> Option<&ChangeHook> {
        self.change_hooks.get(name)
    }

    /// Looks up a visibility predicate.
    pub fn visibility(&self, name: &str) -> Option<&VisibilityPredicate> {
        self.visibility.get(name)
    }
}

impl fmt::Debug for FieldHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHooks")
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .field("change_hooks", &self.change_hooks.keys().collect::<Vec<_>>())
            .field("visibility", &self.visibility.keys().collect::<Vec<_>>())
            .finish()
    }
}
