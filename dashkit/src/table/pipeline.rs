//! Filter, sort and paginate.
//!
//! All functions are pure: input slices are never reordered or modified.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;

use super::SortDirection;
use super::TableColumn;
use super::TableState;
use crate::model::Row;
use crate::model::Value;

// =============================================================================
// Sort
// =============================================================================

/// Sorts rows by `column`.
///
/// With no direction the input is returned as-is without copying. Otherwise
/// a new, stably sorted vector is returned in [`SortKey`] order. Each row's
/// key is computed once.
pub fn sort_rows<'a, R>(
    rows: &'a [R],
    column: &str,
    direction: Option<SortDirection>,
) -> Cow<'a, [R]>
where
    R: AsRef<Row> + Clone,
{
    let Some(direction) = direction else {
        return Cow::Borrowed(rows);
    };

    let mut sorted = rows.to_vec();
    match direction {
        SortDirection::Asc => {
            sorted.sort_by_cached_key(|row| SortKey::of(row.as_ref().get(column)))
        }
        SortDirection::Desc => {
            sorted.sort_by_cached_key(|row| Reverse(SortKey::of(row.as_ref().get(column))))
        }
    }
    Cow::Owned(sorted)
}

/// Orders two cell values by their [`SortKey`].
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    SortKey::of(a).cmp(&SortKey::of(b))
}

/// The position of a cell value in a sorted column.
///
/// Keys rank by kind first: null, then numbers, then instants, then text.
/// Numbers include finite numeric strings and compare with
/// [`f64::total_cmp`], so `NaN` sorts after every other number. Strings that parse as a date-time
/// compare by instant. Everything else compares by [`locale_compare`] on the
/// value's text. The order is total for any mix of kinds in one column.
#[derive(Debug, Clone)]
pub enum SortKey {
    Null,
    Number(f64),
    Instant(DateTime<Utc>),
    Text(String),
}

impl SortKey {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => SortKey::Null,
            Value::DateTime(dt) => SortKey::Instant(*dt),
            Value::Int(i) => SortKey::Number(*i as f64),
            // Folds -0.0 into 0.0.
            Value::Float(f) => SortKey::Number(f + 0.0),
            Value::String(_) => {
                if let Some(n) = value.to_number().filter(|n| n.is_finite()) {
                    SortKey::Number(n + 0.0)
                } else if let Some(dt) = value.as_datetime() {
                    SortKey::Instant(dt)
                } else {
                    SortKey::Text(value.to_text())
                }
            }
            other => SortKey::Text(other.to_text()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Number(_) => 1,
            SortKey::Instant(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Instant(x), SortKey::Instant(y)) => x.cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => locale_compare(x, y),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for SortKey {}

/// Compares strings the way a UI collator orders them.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts
/// before uppercase, then code points decide.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

// =============================================================================
// Filter
// =============================================================================

/// Applies the search query and then every filter.
///
/// Search keeps rows where any searchable column's text contains the query,
/// ignoring case. Filters whose value is null or empty are skipped; a list
/// filter keeps rows whose value is in the list; any other filter keeps rows
/// whose value equals it or whose text contains its text.
pub fn filter_rows<'a>(
    rows: &'a [Row],
    columns: &[TableColumn],
    search: &str,
    filters: &HashMap<String, Value>,
) -> Vec<&'a Row> {
    let mut filtered: Vec<&Row> = rows.iter().collect();

    if !search.is_empty() {
        let query = search.to_lowercase();
        let searchable: Vec<&str> = columns
            .iter()
            .filter(|c| c.searchable)
            .map(|c| c.name.as_str())
            .collect();

        filtered.retain(|row| {
            searchable
                .iter()
                .any(|name| row.get(name).to_text().to_lowercase().contains(&query))
        });
    }

    for (name, wanted) in filters {
        if wanted.is_blank() {
            continue;
        }
        filtered.retain(|row| filter_matches(row.get(name), wanted));
    }

    log::trace!(
        "Filtered {} rows to {} (search {:?}, {} filters)",
        rows.len(),
        filtered.len(),
        search,
        filters.len()
    );
    filtered
}

fn filter_matches(value: &Value, wanted: &Value) -> bool {
    match wanted {
        Value::List(options) => options.iter().any(|option| loosely_equal(value, option)),
        _ => loosely_equal(value, wanted) || value.to_text().contains(&wanted.to_text()),
    }
}

/// Equality that treats `Int` and `Float` holding the same number as equal.
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            a.as_f64() == b.as_f64()
        }
        _ => a == b,
    }
}

// =============================================================================
// Paginate
// =============================================================================

/// Returns page `page` (1-based) of `per_page` rows.
///
/// Page 0, a zero page size or a page past the end gives an empty slice.
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

// =============================================================================
// View
// =============================================================================

/// The rows a table displays for a given state, with paging figures.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a Row>,
    /// Rows left after search and filters (before paging).
    pub filtered_total: usize,
    pub page_count: usize,
    /// 1-based index of the first displayed row; 0 when the page is empty.
    pub from: usize,
    /// 1-based index of the last displayed row; 0 when the page is empty.
    pub to: usize,
}

impl<'a> TableView<'a> {
    /// Runs filter, then sort, then paginate.
    ///
    /// With `paginate` off every matching row is shown on one page.
    pub fn compute(
        rows: &'a [Row],
        columns: &[TableColumn],
        state: &TableState,
        paginate_rows: bool,
    ) -> Self {
        let filtered = filter_rows(rows, columns, state.search(), state.filters());
        let sorted = match state.sort() {
            Some(spec) => sort_rows(&filtered, &spec.column, Some(spec.direction)).into_owned(),
            None => filtered,
        };
        let total = sorted.len();

        if !paginate_rows {
            return Self::page(sorted, total, 1, total.max(1));
        }

        let page = paginate(&sorted, state.current_page(), state.per_page()).to_vec();
        Self::page(page, total, state.current_page(), state.per_page())
    }

    /// Wraps rows that already are one page, as returned by a server.
    pub fn server_page(rows: &'a [Row], total: usize, state: &TableState) -> Self {
        Self::page(
            rows.iter().collect(),
            total,
            state.current_page(),
            state.per_page(),
        )
    }

    fn page(rows: Vec<&'a Row>, total: usize, current_page: usize, per_page: usize) -> Self {
        let (from, to) = if rows.is_empty() {
            (0, 0)
        } else {
            let from = current_page.saturating_sub(1) * per_page + 1;
            (from, from + rows.len() - 1)
        };

        Self {
            rows,
            filtered_total: total,
            page_count: page_count(total, per_page),
            from,
            to,
        }
    }
}
