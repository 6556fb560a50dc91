//! Single-field and whole-form validation

use std::collections::HashMap;

use regex::Regex;

use super::CustomOutcome;
use super::FieldHooks;
use super::FieldValidation;
use super::ValidationRule;
use super::file::file_accepted;
use super::file::format_file_size;
use crate::form::FieldType;
use crate::form::FormField;
use crate::form::FormValues;
use crate::model::FileInfo;
use crate::model::NULL;
use crate::model::Value;

const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const URL_MESSAGE: &str = "Please enter a valid URL";
const PATTERN_MESSAGE: &str = "Please match the requested format";
const CUSTOM_MESSAGE: &str = "Validation failed";

/// Validates one value against a field definition.
///
/// Order of checks:
/// 1. `required` with a null or empty-string value fails immediately.
/// 2. A falsy value on an optional field passes without further checks.
/// 3. The field's rules run in declaration order; the first failure wins.
/// 4. Built-in checks for the field type (email, url, number bounds, text
///    length and pattern, file count/size/type).
pub fn validate_field(
    value: &Value,
    field: &FormField,
    form_data: &FormValues,
    hooks: &FieldHooks,
) -> Option<String> {
    if field.required && value.is_blank() {
        return Some(required_message(field));
    }

    if !value.is_truthy() && !field.required {
        return None;
    }

    for validation in &field.validations {
        if let Some(error) = run_rule(value, validation, field, form_data, hooks) {
            return Some(error);
        }
    }

    check_field_type(value, field)
}

/// Validates every field against `form_data`.
///
/// The returned map holds exactly the fields that fail.
pub fn validate_all_fields(
    fields: &[FormField],
    form_data: &FormValues,
    hooks: &FieldHooks,
) -> HashMap<String, String> {
    fields
        .iter()
        .filter_map(|field| {
            let value = form_data.get(&field.name).unwrap_or(&NULL);
            validate_field(value, field, form_data, hooks).map(|error| (field.name.clone(), error))
        })
        .collect()
}

/// Returns `true` if `text` is a syntactically valid email address.
pub fn is_valid_email(text: &str) -> bool {
    email_address::EmailAddress::is_valid(text)
}

/// Returns `true` if `text` parses as an absolute URL.
pub fn is_valid_url(text: &str) -> bool {
    url::Url::parse(text).is_ok()
}

fn required_message(field: &FormField) -> String {
    format!("{} is required", field.label)
}

fn run_rule(
    value: &Value,
    validation: &FieldValidation,
    field: &FormField,
    form_data: &FormValues,
    hooks: &FieldHooks,
) -> Option<String> {
    let fail = |fallback: String| Some(validation.message.clone().unwrap_or(fallback));

    match &validation.rule {
        ValidationRule::Required => {
            let blank = value.as_str().is_some_and(|s| s.trim().is_empty());
            if !value.is_truthy() || blank {
                return fail(required_message(field));
            }
        }
        ValidationRule::Email => {
            if !is_valid_email(&value.to_text()) {
                return fail(EMAIL_MESSAGE.to_string());
            }
        }
        ValidationRule::Url => {
            if !is_valid_url(&value.to_text()) {
                return fail(URL_MESSAGE.to_string());
            }
        }
        ValidationRule::Min(min) => {
            if value.as_f64().is_some_and(|n| n < *min) {
                return fail(format!("Minimum value is {}", min));
            }
        }
        ValidationRule::Max(max) => {
            if value.as_f64().is_some_and(|n| n > *max) {
                return fail(format!("Maximum value is {}", max));
            }
        }
        ValidationRule::MinLength(min) => {
            if value.as_str().is_some_and(|s| s.chars().count() < *min) {
                return fail(format!("Minimum length is {} characters", min));
            }
        }
        ValidationRule::MaxLength(max) => {
            if value.as_str().is_some_and(|s| s.chars().count() > *max) {
                return fail(format!("Maximum length is {} characters", max));
            }
        }
        ValidationRule::Pattern(pattern) => {
            if value.as_str().is_some_and(|s| !pattern_matches(pattern, s)) {
                return fail(PATTERN_MESSAGE.to_string());
            }
        }
        ValidationRule::Custom(name) => {
            let Some(validator) = hooks.validator(name) else {
                log::warn!(
                    "Field '{}' references unregistered validator '{}'",
                    field.name,
                    name
                );
                return None;
            };
            match validator(value, form_data) {
                CustomOutcome::Pass => {}
                CustomOutcome::Fail => return fail(CUSTOM_MESSAGE.to_string()),
                CustomOutcome::Message(message) => return Some(message),
            }
        }
    }

    None
}

fn check_field_type(value: &Value, field: &FormField) -> Option<String> {
    match field.field_type {
        FieldType::Email => (!is_valid_email(&value.to_text())).then(|| EMAIL_MESSAGE.to_string()),
        FieldType::Url => (!is_valid_url(&value.to_text())).then(|| URL_MESSAGE.to_string()),
        FieldType::Number => {
            let n = value.to_number()?;
            if let Some(min) = field.min
                && n < min
            {
                return Some(format!("Minimum value is {}", min));
            }
            if let Some(max) = field.max
                && n > max
            {
                return Some(format!("Maximum value is {}", max));
            }
            None
        }
        FieldType::Text | FieldType::Textarea => {
            let text = value.as_str()?;
            let length = text.chars().count();
            if let Some(min) = field.min_length
                && length < min
            {
                return Some(format!("Minimum length is {} characters", min));
            }
            if let Some(max) = field.max_length
                && length > max
            {
                return Some(format!("Maximum length is {} characters", max));
            }
            if let Some(pattern) = &field.pattern
                && !pattern_matches(pattern, text)
            {
                return Some(PATTERN_MESSAGE.to_string());
            }
            None
        }
        FieldType::File | FieldType::Image => check_files(value, field),
        _ => None,
    }
}

fn check_files(value: &Value, field: &FormField) -> Option<String> {
    let files: Vec<&FileInfo> = match value {
        Value::File(file) => vec![file],
        Value::Files(files) => files.iter().collect(),
        _ => return None,
    };

    if let Some(max_files) = field.max_files.filter(|n| *n > 0)
        && files.len() > max_files
    {
        return Some(format!("Maximum {} files allowed", max_files));
    }

    for file in files {
        if let Some(max_size) = field.max_size.filter(|n| *n > 0)
            && file.size > max_size
        {
            return Some(format!(
                "File size must not exceed {}",
                format_file_size(max_size)
            ));
        }

        if let Some(accept) = &field.accept
            && !file_accepted(file, accept)
        {
            return Some(format!("File type not accepted. Allowed: {}", accept));
        }
    }

    None
}

fn pattern_matches(pattern: &str, text: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            log::warn!("Invalid validation pattern '{}': {}", pattern, e);
            false
        }
    }
}
