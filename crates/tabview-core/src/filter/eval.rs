use crate::{
    filter::{EqualsConstraint, FilterSpec, RangeConstraint, SearchSpec},
    record::{FieldPresence, TableRow},
    value::{TextMode, Value, strict_order_cmp},
};
use std::cmp::Ordering;

/// Apply a filter spec to a row set.
///
/// Preserves input order, never mutates rows. An empty spec returns the
/// input unchanged (identity law); re-applying the same spec is a no-op
/// (idempotence).
#[must_use]
pub fn apply<R: TableRow + Clone>(rows: &[R], spec: &FilterSpec) -> Vec<R> {
    if spec.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| matches(*row, spec))
        .cloned()
        .collect()
}

/// Evaluate the full conjunction for one row.
///
/// Pure runtime evaluation; no schema access. Any comparison that is not
/// defined (missing field, non-numeric range value) evaluates to false.
fn matches<R: TableRow + ?Sized>(row: &R, spec: &FilterSpec) -> bool {
    if let Some(search) = spec.search_spec()
        && !matches_search(row, search)
    {
        return false;
    }

    if !spec
        .equals_constraints()
        .iter()
        .all(|constraint| matches_equals(row, constraint))
    {
        return false;
    }

    if let Some(range) = spec.range_constraint()
        && !matches_range(row, range)
    {
        return false;
    }

    true
}

/// Case-insensitive substring match, OR-combined across searchable fields.
fn matches_search<R: TableRow + ?Sized>(row: &R, search: &SearchSpec) -> bool {
    let needle = Value::Text(search.needle.clone());

    search.fields.iter().any(|field| {
        on_present(row, field, |value| {
            value.text_contains(&needle, TextMode::Ci).unwrap_or(false)
        })
    })
}

fn matches_equals<R: TableRow + ?Sized>(row: &R, constraint: &EqualsConstraint) -> bool {
    on_present(row, &constraint.field, |value| value == &constraint.value)
}

/// Inclusive range check; undefined comparisons are non-matches.
fn matches_range<R: TableRow + ?Sized>(row: &R, range: &RangeConstraint) -> bool {
    on_present(row, &range.field, |value| {
        let above_min =
            strict_order_cmp(value, &range.min).is_some_and(|ord| ord != Ordering::Less);
        let below_max =
            strict_order_cmp(value, &range.max).is_some_and(|ord| ord != Ordering::Greater);

        above_min && below_max
    })
}

// Evaluate a field constraint only when the field is present.
fn on_present<R: TableRow + ?Sized>(row: &R, field: &str, f: impl FnOnce(&Value) -> bool) -> bool {
    match row.field(field) {
        FieldPresence::Present(value) => f(&value),
        FieldPresence::Missing => false,
    }
}
