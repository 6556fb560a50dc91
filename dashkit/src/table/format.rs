//! Cell formatting and styling

use super::BadgeVariant;
use super::ColumnHooks;
use super::ColumnType;
use super::TableColumn;
use crate::model::Row;
use crate::model::Value;

/// Renders a cell value as display text.
///
/// A registered formatter wins. Otherwise, by column type:
/// - date: `M/D/YYYY`, empty for falsy values, `Invalid Date` when unparsable
/// - number: grouped thousands with up to three decimals, `0` for null
/// - boolean: `Yes` or `No`
/// - anything else: the value's text, empty for falsy values
pub fn format_value(value: &Value, row: &Row, column: &TableColumn, hooks: &ColumnHooks) -> String {
    if let Some(formatter) = resolve(column, "formatter", column.formatter.as_deref(), |name| {
        hooks.formatter(name)
    }) {
        return formatter(value, row, column);
    }

    match column.column_type {
        ColumnType::Date => format_date(value),
        ColumnType::Number => format_number(value),
        ColumnType::Boolean => {
            let text = if value.is_truthy() { "Yes" } else { "No" };
            text.to_string()
        }
        _ if value.is_truthy() => value.to_text(),
        _ => String::new(),
    }
}

/// Classes for a cell: the column's alignment class plus any class hook output.
pub fn cell_class(value: &Value, row: &Row, column: &TableColumn, hooks: &ColumnHooks) -> String {
    let mut class = column.align.class().to_string();
    if let Some(extra) = resolve(column, "cell class", column.cell_class.as_deref(), |name| {
        hooks.cell_class(name)
    }) {
        class.push(' ');
        class.push_str(&extra(value, row, column));
    }
    class
}

/// Inline style for a cell, if the column has a style hook.
pub fn cell_style(
    value: &Value,
    row: &Row,
    column: &TableColumn,
    hooks: &ColumnHooks,
) -> Option<String> {
    resolve(column, "style", column.style.as_deref(), |name| hooks.style(name))
        .map(|style| style(value, row, column))
}

/// Badge variant for a cell, if the column has a badge hook.
pub fn badge_variant(
    value: &Value,
    row: &Row,
    column: &TableColumn,
    hooks: &ColumnHooks,
) -> Option<BadgeVariant> {
    resolve(column, "badge variant", column.badge_variant.as_deref(), |name| {
        hooks.badge_variant(name)
    })
    .map(|select| select(value, row))
}

fn resolve<'h, T>(
    column: &TableColumn,
    kind: &str,
    name: Option<&str>,
    lookup: impl FnOnce(&str) -> Option<&'h T>,
) -> Option<&'h T> {
    let name = name?;
    let hook = lookup(name);
    if hook.is_none() {
        log::warn!(
            "Column '{}' references unregistered {} '{}'",
            column.name,
            kind,
            name
        );
    }
    hook
}

/// Formats a date as `M/D/YYYY`.
pub fn format_date(value: &Value) -> String {
    if !value.is_truthy() {
        return String::new();
    }
    match value.as_datetime() {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Formats a number with `,` thousands separators and at most three decimals.
pub fn format_number(value: &Value) -> String {
    match value {
        Value::Null => "0".to_string(),
        Value::Int(i) => {
            let grouped = group_digits(&i.unsigned_abs().to_string());
            if *i < 0 { format!("-{}", grouped) } else { grouped }
        }
        Value::Float(f) => format_float(*f),
        other => {
            let text = other.to_text();
            if text.is_empty() { "0".to_string() } else { text }
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        let text = if f > 0.0 { "∞" } else { "-∞" };
        return text.to_string();
    }

    let fixed = format!("{:.3}", f.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (trimmed, None),
    };

    let mut out = String::new();
    if f < 0.0 && trimmed != "0" {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnAlign;

    fn typed(column_type: ColumnType) -> TableColumn {
        TableColumn::new("v", "V").column_type(column_type)
    }

    fn fmt(value: impl Into<Value>, column: &TableColumn) -> String {
        format_value(&value.into(), &Row::new(), column, &ColumnHooks::new())
    }

    #[test]
    fn test_format_number() {
        let column = typed(ColumnType::Number);
        assert_eq!(fmt(1234567, &column), "1,234,567");
        assert_eq!(fmt(-1234, &column), "-1,234");
        assert_eq!(fmt(1234.5678, &column), "1,234.568");
        assert_eq!(fmt(0.1, &column), "0.1");
        assert_eq!(fmt(999.9999, &column), "1,000");
        assert_eq!(fmt(Value::Null, &column), "0");
        assert_eq!(fmt(0, &column), "0");
    }

    #[test]
    fn test_format_date() {
        let column = typed(ColumnType::Date);
        assert_eq!(fmt("2024-03-05", &column), "3/5/2024");
        assert_eq!(fmt("2024-12-25T10:00:00Z", &column), "12/25/2024");
        assert_eq!(fmt("garbage", &column), "Invalid Date");
        assert_eq!(fmt(Value::Null, &column), "");
    }

    #[test]
    fn test_format_boolean_and_default() {
        assert_eq!(fmt(true, &typed(ColumnType::Boolean)), "Yes");
        assert_eq!(fmt(Value::Null, &typed(ColumnType::Boolean)), "No");
        assert_eq!(fmt("hello", &typed(ColumnType::Text)), "hello");
        assert_eq!(fmt(0, &typed(ColumnType::Text)), "");
    }

    #[test]
    fn test_formatter_hook_wins() {
        let hooks = ColumnHooks::new().with_formatter("upper", |value, _row, _column| {
            value.to_text().to_uppercase()
        });
        let column = typed(ColumnType::Number).formatter("upper");
        assert_eq!(
            format_value(&Value::from("abc"), &Row::new(), &column, &hooks),
            "ABC"
        );
    }

    #[test]
    fn test_unregistered_formatter_falls_back() {
        let column = typed(ColumnType::Boolean).formatter("missing");
        assert_eq!(fmt(false, &column), "No");
    }

    #[test]
    fn test_cell_class() {
        let hooks = ColumnHooks::new().with_cell_class("stock", |value, _row, _column| {
            let low = value.as_f64().is_some_and(|n| n < 10.0);
            let class = if low { "text-red" } else { "text-green" };
            class.to_string()
        });
        let column = TableColumn::new("stock", "Stock")
            .align(ColumnAlign::Right)
            .cell_class("stock");
        let row = Row::new();
        assert_eq!(
            cell_class(&Value::from(3), &row, &column, &hooks),
            "text-right text-red"
        );
        assert_eq!(
            cell_class(&Value::from(3), &row, &TableColumn::new("x", "X"), &hooks),
            "text-left"
        );
    }

    #[test]
    fn test_badge_variant() {
        let hooks = ColumnHooks::new().with_badge_variant("status", |value, _row| {
            match value.as_str() {
                Some("published") => BadgeVariant::Success,
                _ => BadgeVariant::Info,
            }
        });
        let column = TableColumn::new("status", "Status")
            .column_type(ColumnType::Badge)
            .badge_variant("status");
        let row = Row::new();
        assert_eq!(
            badge_variant(&Value::from("published"), &row, &column, &hooks),
            Some(BadgeVariant::Success)
        );
        assert_eq!(
            badge_variant(&Value::from("x"), &row, &TableColumn::new("s", "S"), &hooks),
            None
        );
    }
}
