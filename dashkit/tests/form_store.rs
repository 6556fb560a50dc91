use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashkit::form::{FieldType, FormField, FormOptions, FormSchema, FormStore, Visibility};
use dashkit::model::Value;
use dashkit::validation::FieldHooks;

fn profile_schema() -> FormSchema {
    FormSchema::new(vec![
        FormField::new("name", "Name", FieldType::Text).required(),
        FormField::new("age", "Age", FieldType::Number).min(18.0),
        FormField::new("newsletter", "Newsletter", FieldType::Switch),
        FormField::new("country", "Country", FieldType::Select).default_value("NL"),
    ])
    .unwrap()
}

#[test]
fn test_initial_values() {
    let form = FormStore::new(profile_schema());
    assert_eq!(form.field_value("name"), &Value::from(""));
    assert_eq!(form.field_value("age"), &Value::from(0));
    assert_eq!(form.field_value("newsletter"), &Value::from(false));
    assert_eq!(form.field_value("country"), &Value::from("NL"));
    assert_eq!(form.field_value("unknown"), &Value::Null);
}

#[test]
fn test_set_value_marks_dirty_without_validating_by_default() {
    let mut form = FormStore::new(profile_schema());
    form.set_field_value("age", 5);
    assert!(form.state().is_dirty("age"));
    assert!(form.state().error("age").is_none());
}

#[test]
fn test_validate_on_change() {
    let schema = profile_schema().with_options(FormOptions::default().with_validate_on_change(true));
    let mut form = FormStore::new(schema);
    form.set_field_value("age", 5);
    assert_eq!(form.state().error("age"), Some("Minimum value is 18"));
    form.set_field_value("age", 21);
    assert!(form.state().error("age").is_none());
}

#[test]
fn test_touch_validates_on_blur() {
    let schema = profile_schema().with_options(FormOptions::default().with_validate_on_blur(true));
    let mut form = FormStore::new(schema);
    form.set_field_touched("name");
    assert!(form.state().is_touched("name"));
    assert_eq!(form.state().error("name"), Some("Name is required"));
}

#[test]
fn test_touch_without_blur_validation() {
    let mut form = FormStore::new(profile_schema());
    form.set_field_touched("name");
    assert!(form.state().is_touched("name"));
    assert!(form.state().error("name").is_none());
}

#[test]
fn test_errors_set_and_clear() {
    let mut form = FormStore::new(profile_schema());
    form.set_field_error("name", "Taken");
    assert_eq!(form.state().error("name"), Some("Taken"));
    form.clear_field_error("name");
    assert!(!form.state().errors().contains_key("name"));
}

#[test]
fn test_validate_all_replaces_errors() {
    let mut form = FormStore::new(profile_schema());
    form.set_field_error("country", "Server says no");
    assert!(!form.validate_all());
    assert_eq!(form.state().errors().len(), 1);
    assert!(form.state().error("name").is_some());
    assert!(!form.state().is_validating());

    form.set_field_value("name", "Ada");
    assert!(form.validate_all());
    assert!(form.state().errors().is_empty());
}

#[test]
fn test_validate_field_returns_validity() {
    let mut form = FormStore::new(profile_schema());
    assert!(!form.validate_field("name"));
    form.set_field_value("name", "Ada");
    assert!(form.validate_field("name"));
    assert!(form.validate_field("does-not-exist"));
}

#[test]
fn test_submit_and_reset() {
    let mut form = FormStore::new(profile_schema());
    assert!(!form.submit());
    form.set_field_value("name", "Ada");
    assert!(form.submit());
    assert_eq!(form.state().submit_count(), 2);

    form.set_loading(true);
    assert!(form.state().is_submitting());

    form.reset_form();
    assert_eq!(form.state().submit_count(), 0);
    assert_eq!(form.field_value("name"), &Value::from(""));
    assert!(!form.state().any_dirty());
    assert!(form.state().errors().is_empty());
}

#[test]
fn test_submit_without_validation() {
    let schema = profile_schema().with_options(FormOptions::default().with_validate_on_submit(false));
    let mut form = FormStore::new(schema);
    assert!(form.submit());
    assert_eq!(form.state().submit_count(), 1);
}

#[test]
fn test_change_hook_runs_after_update() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let hooks = FieldHooks::new().with_change_hook("track", move |value, form| {
        assert_eq!(form.get("name"), Some(value));
        seen.fetch_add(1, Ordering::SeqCst);
    });
    let schema = FormSchema::new(vec![
        FormField::new("name", "Name", FieldType::Text).on_change("track"),
        FormField::new("other", "Other", FieldType::Text),
    ])
    .unwrap()
    .with_hooks(hooks);

    let mut form = FormStore::new(schema);
    form.set_field_value("name", "Ada");
    form.set_field_value("other", "x");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_visible_fields_follow_predicates() {
    let hooks = FieldHooks::new().with_visibility("is_company", |form| {
        form.get("account").and_then(Value::as_str) == Some("company")
    });
    let schema = FormSchema::new(vec![
        FormField::new("account", "Account", FieldType::Radio).default_value("personal"),
        FormField::new("company", "Company", FieldType::Text).visible_when("is_company"),
        FormField::new("internal", "Internal", FieldType::Text).hidden(),
        FormField::new("unknown", "Unknown", FieldType::Text).visible_when("not_registered"),
    ])
    .unwrap()
    .with_hooks(hooks);

    let mut form = FormStore::new(schema);
    let names = |form: &FormStore| -> Vec<String> {
        form.visible_fields().iter().map(|f| f.name.clone()).collect()
    };
    assert_eq!(names(&form), vec!["account", "unknown"]);

    form.set_field_value("account", "company");
    assert_eq!(names(&form), vec!["account", "company", "unknown"]);
    assert!(matches!(
        form.schema().field("internal").map(|f| &f.visible),
        Some(Visibility::Hidden)
    ));
}
