//! Form schema: fields, hooks, options and the initial snapshot

use std::collections::HashSet;

use super::FormField;
use super::FormOptions;
use super::FormSection;
use super::FormValues;
use crate::error::ConfigError;
use crate::validation::FieldHooks;

/// Everything about a form that does not change during a session.
///
/// The initial values are captured once, at construction.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FormField>,
    hooks: FieldHooks,
    options: FormOptions,
    initial: FormValues,
}

impl FormSchema {
    /// Creates a schema from field definitions.
    ///
    /// Field names must be unique.
    pub fn new(fields: Vec<FormField>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
        }

        let initial = fields
            .iter()
            .map(|field| (field.name.clone(), field.initial_value()))
            .collect();

        Ok(Self {
            fields,
            hooks: FieldHooks::new(),
            options: FormOptions::default(),
            initial,
        })
    }

    /// Creates a schema from sections, flattening their fields in order.
    pub fn from_sections(sections: Vec<FormSection>) -> Result<Self, ConfigError> {
        Self::new(sections.into_iter().flat_map(|s| s.fields).collect())
    }

    /// Parses a JSON array of field definitions.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let fields: Vec<FormField> =
            serde_json::from_str(json).map_err(|e| ConfigError::json("form", e))?;
        Self::new(fields)
    }

    /// Sets the callback registry.
    pub fn with_hooks(mut self, hooks: FieldHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the form options.
    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn hooks(&self) -> &FieldHooks {
        &self.hooks
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Values recorded at construction.
    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldType;
    use crate::model::Value;

    #[test]
    fn test_duplicate_names_rejected() {
        let result = FormSchema::new(vec![
            FormField::new("a", "A", FieldType::Text),
            FormField::new("a", "Again", FieldType::Number),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateField(name)) if name == "a"));
    }

    #[test]
    fn test_from_json() {
        let schema = FormSchema::from_json(
            r#"[{"name": "agree", "label": "Agree", "type": "checkbox"},
                {"name": "qty", "label": "Qty", "type": "number", "defaultValue": 2}]"#,
        )
        .unwrap();
        assert_eq!(schema.initial_values()["agree"], Value::Bool(false));
        assert_eq!(schema.initial_values()["qty"], Value::Int(2));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = FormSchema::from_json(r#"[{"name": 1}]"#);
        assert!(matches!(result, Err(ConfigError::Json { kind: "form", .. })));
    }
}
