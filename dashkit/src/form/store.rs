//! Form state container

use super::FormAction;
use super::FormField;
use super::FormSchema;
use super::FormState;
use super::FormValues;
use super::Visibility;
use crate::model::Value;

/// Owns the state of one form session.
///
/// Every method goes through [`FormStore::dispatch`].
///
/// # Example
///
/// ```
/// use dashkit::form::{FieldType, FormField, FormSchema, FormStore};
///
/// let schema = FormSchema::new(vec![
///     FormField::new("email", "Email", FieldType::Email).required(),
/// ])?;
/// let mut form = FormStore::new(schema);
///
/// assert!(!form.submit());
/// assert_eq!(form.state().error("email"), Some("Email is required"));
///
/// form.set_field_value("email", "ada@example.com");
/// assert!(form.submit());
/// # Ok::<(), dashkit::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FormStore {
    schema: FormSchema,
    state: FormState,
}

impl FormStore {
    /// Creates a store in the schema's initial state.
    pub fn new(schema: FormSchema) -> Self {
        let state = FormState::initial(&schema);
        Self { schema, state }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies an action and returns the new state.
    ///
    /// After a value change the field's change hook, if any, is called with
    /// the updated form.
    pub fn dispatch(&mut self, action: FormAction) -> &FormState {
        log::debug!("Form action: {:?}", action);
        self.state = self.state.reduce(&action, &self.schema);

        if let FormAction::SetValue { name, value } = &action {
            self.run_change_hook(name, value);
        }

        &self.state
    }

    fn run_change_hook(&self, name: &str, value: &Value) {
        let Some(hook_name) = self.schema.field(name).and_then(|f| f.on_change.as_deref()) else {
            return;
        };
        match self.schema.hooks().change_hook(hook_name) {
            Some(hook) => hook(value, self.state.values()),
            None => log::warn!(
                "Field '{}' references unregistered change hook '{}'",
                name,
                hook_name
            ),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub fn set_field_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.dispatch(FormAction::SetValue {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn set_field_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.dispatch(FormAction::SetError {
            name: name.into(),
            message: message.into(),
        });
    }

    pub fn clear_field_error(&mut self, name: impl Into<String>) {
        self.dispatch(FormAction::ClearError { name: name.into() });
    }

    pub fn set_field_touched(&mut self, name: impl Into<String>) {
        self.dispatch(FormAction::Touch { name: name.into() });
    }

    /// Validates one field; returns `true` if it passes.
    pub fn validate_field(&mut self, name: &str) -> bool {
        self.dispatch(FormAction::ValidateField {
            name: name.to_string(),
        })
        .error(name)
        .is_none()
    }

    /// Validates every field; returns `true` if all pass.
    pub fn validate_all(&mut self) -> bool {
        self.dispatch(FormAction::ValidateAll).is_valid()
    }

    pub fn reset_form(&mut self) {
        self.dispatch(FormAction::Reset);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(FormAction::SetLoading(loading));
    }

    /// Records a submit attempt; returns `true` if the form may be submitted.
    pub fn submit(&mut self) -> bool {
        self.dispatch(FormAction::Submit).is_valid()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn field_value(&self, name: &str) -> &Value {
        self.state.value(name)
    }

    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    /// Returns `true` if the field should be shown for the current values.
    ///
    /// Predicates that are not registered leave the field visible.
    pub fn is_field_visible(&self, field: &FormField) -> bool {
        match &field.visible {
            Visibility::Always => true,
            Visibility::Hidden => false,
            Visibility::When(predicate) => match self.schema.hooks().visibility(predicate) {
                Some(check) => check(self.state.values()),
                None => {
                    log::warn!(
                        "Field '{}' references unregistered visibility predicate '{}'",
                        field.name,
                        predicate
                    );
                    true
                }
            },
        }
    }

    /// Fields to display, ordered by `order` and then declaration order.
    pub fn visible_fields(&self) -> Vec<&FormField> {
        let mut fields: Vec<&FormField> = self
            .schema
            .fields()
            .iter()
            .filter(|field| self.is_field_visible(field))
            .collect();
        fields.sort_by_key(|field| field.order.unwrap_or(0));
        fields
    }
}
