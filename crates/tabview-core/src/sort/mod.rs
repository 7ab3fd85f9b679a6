//! Module: sort
//! Responsibility: sort key state and stable field-driven ordering.
//! Does not own: filtering or pagination; sorting applies to the filtered
//! set, never the reverse.
//! Boundary: pure snapshot transform; returns a new vec, input untouched.


use crate::{
    record::{FieldPresence, TableRow},
    value::{Value, canonical_cmp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

///
/// SortKey
///
/// Single active `(field, direction)` pair; header affordances read it
/// back as the sort indicator.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

///
/// SortState
///
/// Owns the active sort key and the field-selection rule: picking a new
/// field resets direction to that field's default (descending for the
/// view's primary ranking field, ascending otherwise); re-selecting the
/// active field flips direction.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortState {
    key: Option<SortKey>,
}

impl SortState {
    #[must_use]
    pub const fn new() -> Self {
        Self { key: None }
    }

    #[must_use]
    pub const fn key(&self) -> Option<&SortKey> {
        self.key.as_ref()
    }

    /// Select a sort field, applying the default-direction rule.
    pub fn select(&mut self, field: impl Into<String>, ranking_field: Option<&str>) {
        let field = field.into();

        let direction = match &self.key {
            Some(active) if active.field == field => active.direction.flipped(),
            _ if ranking_field == Some(field.as_str()) => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        self.key = Some(SortKey { field, direction });
    }

    pub fn clear(&mut self) {
        self.key = None;
    }
}

/// Sort a row snapshot by the given key.
///
/// Stable: ties preserve relative input order (std stable sort). When every
/// present value on the sort field is numeric the comparison is numeric;
/// otherwise values compare as casefolded text. Rows missing the field sort
/// last in both directions.
#[must_use]
pub fn apply<R: TableRow + Clone>(rows: &[R], key: &SortKey) -> Vec<R> {
    let mut sorted = rows.to_vec();

    let numeric = all_present_numeric(&sorted, &key.field);

    sorted.sort_by(|a, b| {
        let ord = match (field_of(a, &key.field), field_of(b, &key.field)) {
            (Some(left), Some(right)) => compare_values(&left, &right, numeric),
            // missing sorts last regardless of direction
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        match key.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    sorted
}

fn field_of<R: TableRow>(row: &R, field: &str) -> Option<Value> {
    match row.field(field) {
        FieldPresence::Present(value) => Some(value),
        FieldPresence::Missing => None,
    }
}

fn all_present_numeric<R: TableRow>(rows: &[R], field: &str) -> bool {
    let mut saw_any = false;

    for row in rows {
        match field_of(row, field) {
            Some(value) if value.is_numeric() => saw_any = true,
            Some(_) => return false,
            None => {}
        }
    }

    saw_any
}

fn compare_values(left: &Value, right: &Value, numeric: bool) -> Ordering {
    if numeric {
        canonical_cmp(left, right)
    } else {
        left.sort_text().cmp(&right.sort_text())
    }
}
