//! Declarative validation rules

use serde::Deserialize;
use serde::Serialize;

/// A named check attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// Value must be truthy and not blank.
    Required,
    /// Value must be an email address.
    Email,
    /// Value must be an absolute URL.
    Url,
    /// Numeric value must be at least this.
    Min(f64),
    /// Numeric value must be at most this.
    Max(f64),
    /// String value must have at least this many characters.
    MinLength(usize),
    /// String value must have at most this many characters.
    MaxLength(usize),
    /// String value must contain a match of this regular expression.
    Pattern(String),
    /// Named validator resolved through [`FieldHooks`](super::FieldHooks).
    Custom(String),
}

/// A rule plus an optional message overriding the rule's fallback text.
///
/// In JSON this is the `{ "rule": "min", "value": 18, "message": "..." }`
/// shape; custom rules name their validator with `"validator"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ValidationRepr", into = "ValidationRepr")]
pub struct FieldValidation {
    pub rule: ValidationRule,
    pub message: Option<String>,
}

impl FieldValidation {
    /// Creates a validation using the rule's fallback message.
    pub fn new(rule: ValidationRule) -> Self {
        Self {
            rule,
            message: None,
        }
    }

    /// Overrides the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<ValidationRule> for FieldValidation {
    fn from(rule: ValidationRule) -> Self {
        Self::new(rule)
    }
}

// =============================================================================
// Serde representation
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RuleKind {
    Required,
    Email,
    Url,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationRepr {
    rule: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validator: Option<String>,
}

impl TryFrom<ValidationRepr> for FieldValidation {
    type Error = String;

    fn try_from(repr: ValidationRepr) -> Result<Self, Self::Error> {
        let number = |kind: &str| {
            repr.value
                .as_ref()
                .and_then(serde_json::Value::as_f64)
                .ok_or_else(|| format!("rule '{}' needs a numeric value", kind))
        };
        let length = |kind: &str| {
            repr.value
                .as_ref()
                .and_then(serde_json::Value::as_u64)
                .map(|n| n as usize)
                .ok_or_else(|| format!("rule '{}' needs a non-negative integer value", kind))
        };

        let rule = match repr.rule {
            RuleKind::Required => ValidationRule::Required,
            RuleKind::Email => ValidationRule::Email,
            RuleKind::Url => ValidationRule::Url,
            RuleKind::Min => ValidationRule::Min(number("min")?),
            RuleKind::Max => ValidationRule::Max(number("max")?),
            RuleKind::MinLength => ValidationRule::MinLength(length("minLength")?),
            RuleKind::MaxLength => ValidationRule::MaxLength(length("maxLength")?),
            RuleKind::Pattern => ValidationRule::Pattern(
                repr.value
                    .as_ref()
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
                    .ok_or("rule 'pattern' needs a string value")?,
            ),
            RuleKind::Custom => ValidationRule::Custom(
                repr.validator
                    .clone()
                    .ok_or("rule 'custom' needs a validator name")?,
            ),
        };

        Ok(Self {
            rule,
            message: repr.message,
        })
    }
}

impl From<FieldValidation> for ValidationRepr {
    fn from(validation: FieldValidation) -> Self {
        let (rule, value, validator) = match validation.rule {
            ValidationRule::Required => (RuleKind::Required, None, None),
            ValidationRule::Email => (RuleKind::Email, None, None),
            ValidationRule::Url => (RuleKind::Url, None, None),
            ValidationRule::Min(n) => (RuleKind::Min, Some(serde_json::json!(n)), None),
            ValidationRule::Max(n) => (RuleKind::Max, Some(serde_json::json!(n)), None),
            ValidationRule::MinLength(n) => (RuleKind::MinLength, Some(serde_json::json!(n)), None),
            ValidationRule::MaxLength(n) => (RuleKind::MaxLength, Some(serde_json::json!(n)), None),
            ValidationRule::Pattern(p) => (RuleKind::Pattern, Some(serde_json::json!(p)), None),
            ValidationRule::Custom(name) => (RuleKind::Custom, None, Some(name)),
        };
        Self {
            rule,
            value,
            message: validation.message,
            validator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rules() {
        let json = r#"[
            {"rule": "required"},
            {"rule": "minLength", "value": 3, "message": "Too short"},
            {"rule": "pattern", "value": "^[a-z]+$"},
            {"rule": "custom", "validator": "unique_username"}
        ]"#;
        let rules: Vec<FieldValidation> = serde_json::from_str(json).unwrap();
        assert_eq!(rules[0].rule, ValidationRule::Required);
        assert_eq!(rules[1].rule, ValidationRule::MinLength(3));
        assert_eq!(rules[1].message.as_deref(), Some("Too short"));
        assert_eq!(rules[2].rule, ValidationRule::Pattern("^[a-z]+$".into()));
        assert_eq!(rules[3].rule, ValidationRule::Custom("unique_username".into()));
    }

    #[test]
    fn test_rule_missing_value_is_rejected() {
        let result: Result<FieldValidation, _> = serde_json::from_str(r#"{"rule": "min"}"#);
        assert!(result.is_err());
    }
}
