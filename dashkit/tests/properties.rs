use std::collections::HashMap;

use proptest::prelude::*;

use dashkit::form::{FieldType, FormField, FormValues};
use dashkit::model::{Row, Value};
use dashkit::table::pipeline::compare_values;
use dashkit::table::{SortDirection, TableColumn, filter_rows, paginate, sort_rows};
use dashkit::validation::{FieldHooks, ValidationRule, validate_all_fields, validate_field};

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((0i64..5, "[a-cA-C ]{0,4}"), 0..40).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (rank, label))| {
                Row::new()
                    .set("id", i as i64)
                    .set("rank", rank)
                    .set("label", label)
            })
            .collect()
    })
}

fn mixed_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        (-50i64..50).prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        Just(Value::Float(f64::NAN)),
        Just(Value::Float(-0.0)),
        "-?[0-9]{1,3}(\\.[0-9])?".prop_map(Value::String),
        "[a-cA-C]{0,3}".prop_map(Value::String),
        "20[0-9]{2}-0[1-9]-1[0-9]".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn mixed_rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(mixed_value(), 0..300).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Row::new().set("id", i as i64).set("v", v))
            .collect()
    })
}

fn row_ids(rows: &[Row]) -> Vec<i64> {
    rows.iter()
        .filter_map(|r| match r.get("id") {
            Value::Int(i) => Some(*i),
            _ => None,
        })
        .collect()
}

fn ids(rows: &[Row]) -> Vec<Value> {
    rows.iter().map(|r| r.get("id").clone()).collect()
}

proptest! {
    #[test]
    fn test_sort_twice_equals_single_desc(rows in rows_strategy()) {
        let asc = sort_rows(&rows, "rank", Some(SortDirection::Asc)).into_owned();
        let twice = sort_rows(&asc, "rank", Some(SortDirection::Desc)).into_owned();
        let once = sort_rows(&rows, "rank", Some(SortDirection::Desc)).into_owned();
        prop_assert_eq!(ids(&twice), ids(&once));
    }

    #[test]
    fn test_sort_mixed_column_is_ordered_permutation(rows in mixed_rows_strategy()) {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_rows(&rows, "v", Some(direction)).into_owned();

            let mut before = row_ids(&rows);
            let mut after = row_ids(&sorted);
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);

            for pair in sorted.windows(2) {
                let ordering = compare_values(pair[0].get("v"), pair[1].get("v"));
                let ordering = match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                };
                prop_assert_ne!(ordering, std::cmp::Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_sort_without_direction_is_identity(rows in rows_strategy()) {
        let same = sort_rows(&rows, "label", None);
        prop_assert_eq!(ids(&same), ids(&rows));
    }

    #[test]
    fn test_search_keeps_exactly_matching_rows(rows in rows_strategy(), query in "[a-cA-C]{1,2}") {
        let columns = vec![TableColumn::new("label", "Label"), TableColumn::new("id", "ID").not_searchable()];
        let kept = filter_rows(&rows, &columns, &query, &HashMap::new());
        let needle = query.to_lowercase();
        let matches = |row: &Row| row.get("label").to_text().to_lowercase().contains(&needle);

        prop_assert!(kept.iter().all(|row| matches(row)));
        prop_assert_eq!(kept.len(), rows.iter().filter(|row| matches(row)).count());
    }

    #[test]
    fn test_paginate_length_and_reassembly(len in 0usize..60, per_page in 1usize..15, page in 1usize..10) {
        let data: Vec<usize> = (0..len).collect();
        let expected = per_page.min(len.saturating_sub((page - 1) * per_page));
        prop_assert_eq!(paginate(&data, page, per_page).len(), expected);

        let pages = len.div_ceil(per_page);
        let rebuilt: Vec<usize> = (1..=pages)
            .flat_map(|p| paginate(&data, p, per_page).to_vec())
            .collect();
        prop_assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_required_error_wins_for_empty_values(
        use_null in any::<bool>(),
        min_length in 0usize..10,
        pattern in "[a-z]{1,3}",
    ) {
        let field = FormField::new("f", "Field", FieldType::Text)
            .required()
            .validation(ValidationRule::MinLength(min_length))
            .validation(ValidationRule::Pattern(pattern))
            .validation(ValidationRule::Email);
        let value = if use_null { Value::Null } else { Value::from("") };
        let error = validate_field(&value, &field, &FormValues::new(), &FieldHooks::new());
        prop_assert_eq!(error.as_deref(), Some("Field is required"));
    }

    #[test]
    fn test_validate_all_matches_individual_results(ages in prop::collection::vec(prop::option::of(0i64..100), 1..8)) {
        let fields: Vec<FormField> = (0..ages.len())
            .map(|i| FormField::new(format!("age{}", i), "Age", FieldType::Number).required().min(18.0).max(65.0))
            .collect();
        let data: FormValues = ages
            .iter()
            .enumerate()
            .map(|(i, age)| (format!("age{}", i), Value::from(*age)))
            .collect();
        let hooks = FieldHooks::new();

        let all = validate_all_fields(&fields, &data, &hooks);
        for field in &fields {
            let single = validate_field(&data[&field.name], field, &data, &hooks);
            prop_assert_eq!(all.get(&field.name).cloned(), single);
        }
    }
}
