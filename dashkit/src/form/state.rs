//! Form state and its transitions

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Serialize;

use super::FormSchema;
use super::FormValues;
use crate::model::NULL;
use crate::model::Value;
use crate::validation::validate_all_fields;
use crate::validation::validate_field;

/// A change to a form's state.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Replace a field's value and mark it dirty.
    SetValue { name: String, value: Value },
    /// Record an error for a field.
    SetError { name: String, message: String },
    /// Remove a field's error.
    ClearError { name: String },
    /// Mark a field as touched.
    Touch { name: String },
    /// Validate one field against the current values.
    ValidateField { name: String },
    /// Validate every field, replacing the error map.
    ValidateAll,
    /// Restore the initial values and clear all bookkeeping.
    Reset,
    /// Set the submitting flag.
    SetLoading(bool),
    /// Count a submit attempt (and validate, when enabled).
    Submit,
}

/// Snapshot of a form session.
///
/// Only [`FormState::reduce`] produces new states.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    values: FormValues,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
    dirty: HashSet<String>,
    is_submitting: bool,
    is_validating: bool,
    submit_count: u32,
}

impl FormState {
    /// Creates the state a fresh form starts in.
    pub fn initial(schema: &FormSchema) -> Self {
        Self {
            values: schema.initial_values().clone(),
            ..Self::default()
        }
    }

    /// Applies `action`, returning the next state.
    pub fn reduce(&self, action: &FormAction, schema: &FormSchema) -> Self {
        let mut next = self.clone();

        match action {
            FormAction::SetValue { name, value } => {
                next.values.insert(name.clone(), value.clone());
                next.dirty.insert(name.clone());
                if schema.options().validate_on_change {
                    next.validate_one(name, schema);
                }
            }
            FormAction::SetError { name, message } => {
                next.errors.insert(name.clone(), message.clone());
            }
            FormAction::ClearError { name } => {
                next.errors.remove(name);
            }
            FormAction::Touch { name } => {
                next.touched.insert(name.clone());
                if schema.options().validate_on_blur {
                    next.validate_one(name, schema);
                }
            }
            FormAction::ValidateField { name } => {
                next.validate_one(name, schema);
            }
            FormAction::ValidateAll => {
                next.validate_every(schema);
            }
            FormAction::Reset => {
                next.values = schema.initial_values().clone();
                next.errors.clear();
                next.touched.clear();
                next.dirty.clear();
                next.submit_count = 0;
            }
            FormAction::SetLoading(loading) => {
                next.is_submitting = *loading;
            }
            FormAction::Submit => {
                next.submit_count += 1;
                if schema.options().validate_on_submit {
                    next.validate_every(schema);
                }
            }
        }

        next
    }

    fn validate_one(&mut self, name: &str, schema: &FormSchema) {
        let Some(field) = schema.field(name) else {
            log::warn!("Validation requested for unknown field '{}'", name);
            return;
        };

        let value = self.values.get(name).unwrap_or(&NULL);
        match validate_field(value, field, &self.values, schema.hooks()) {
            Some(error) => {
                self.errors.insert(name.to_string(), error);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    fn validate_every(&mut self, schema: &FormSchema) {
        self.is_validating = true;
        self.errors = validate_all_fields(schema.fields(), &self.values, schema.hooks());
        self.is_validating = false;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value of a field; `Null` when unknown.
    pub fn value(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&NULL)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    /// Returns `true` if any field has been changed.
    pub fn any_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_validating(&self) -> bool {
        self.is_validating
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Returns `true` when no field currently has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldType;
    use crate::form::FormField;
    use crate::form::FormOptions;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("name", "Name", FieldType::Text).required(),
            FormField::new("age", "Age", FieldType::Number).min(18.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let schema = schema();
        let state = FormState::initial(&schema);
        let action = FormAction::SetValue {
            name: "name".into(),
            value: "Ada".into(),
        };
        let next = state.reduce(&action, &schema);

        assert_eq!(state.value("name"), &Value::from(""));
        assert_eq!(next.value("name"), &Value::from("Ada"));
        assert!(next.is_dirty("name"));
        assert!(!state.is_dirty("name"));
    }

    #[test]
    fn test_validate_on_change() {
        let schema = schema().with_options(FormOptions::default().with_validate_on_change(true));
        let state = FormState::initial(&schema).reduce(
            &FormAction::SetValue {
                name: "age".into(),
                value: 10.into(),
            },
            &schema,
        );
        assert_eq!(state.error("age"), Some("Minimum value is 18"));
    }

    #[test]
    fn test_submit_validates_and_counts() {
        let schema = schema();
        let state = FormState::initial(&schema).reduce(&FormAction::Submit, &schema);
        assert_eq!(state.submit_count(), 1);
        assert_eq!(state.error("name"), Some("Name is required"));
        assert!(!state.is_validating());
    }

    #[test]
    fn test_reset_restores_initial() {
        let schema = schema();
        let state = FormState::initial(&schema)
            .reduce(
                &FormAction::SetValue {
                    name: "name".into(),
                    value: "x".into(),
                },
                &schema,
            )
            .reduce(&FormAction::Submit, &schema)
            .reduce(&FormAction::Reset, &schema);

        assert_eq!(state, FormState::initial(&schema));
    }
}
