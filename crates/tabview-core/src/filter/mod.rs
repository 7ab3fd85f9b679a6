//! Module: filter
//! Responsibility: filter spec model and conjunction evaluation over rows.
//! Does not own: ordering, pagination, or selection semantics.
//! Boundary: pure row-set transform; never mutates input rows or order.

mod eval;

#[cfg(test)]
mod tests;

use crate::value::Value;
use serde::{Deserialize, Serialize};

pub use eval::apply;

/// Sentinel option values that mean "no constraint" in dropdown filters.
const NO_CONSTRAINT_SENTINELS: [&str; 2] = ["", "all"];

///
/// SearchSpec
///
/// Free-text search: one needle matched case-insensitively as a substring
/// against each searchable field, OR-combined across those fields.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SearchSpec {
    pub needle: String,
    pub fields: Vec<String>,
}

///
/// EqualsConstraint
///
/// Categorical field-equality constraint (country, industry, plan tier).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EqualsConstraint {
    pub field: String,
    pub value: Value,
}

///
/// RangeConstraint
///
/// Inclusive numeric range on a ranking field: `min <= value <= max`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RangeConstraint {
    pub field: String,
    pub min: Value,
    pub max: Value,
}

///
/// FilterSpec
///
/// Conjunction of all present constraints. Construction normalizes away
/// sentinel values ("" and "all") so evaluation never has to special-case
/// them; an empty spec is the identity transform.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterSpec {
    search: Option<SearchSpec>,
    equals: Vec<EqualsConstraint>,
    range: Option<RangeConstraint>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search constraint.
    ///
    /// An empty or whitespace-only needle, or an empty field list, clears
    /// the constraint instead of storing a vacuous one.
    #[must_use]
    pub fn search(
        mut self,
        needle: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let needle = needle.into();
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        self.search = if needle.trim().is_empty() || fields.is_empty() {
            None
        } else {
            Some(SearchSpec { needle, fields })
        };
        self
    }

    /// Add a categorical equality constraint.
    ///
    /// Sentinel values ("", "all", case-insensitive) mean "no constraint"
    /// and are dropped at construction.
    #[must_use]
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();

        if is_sentinel(&value) {
            return self;
        }

        self.equals.push(EqualsConstraint {
            field: field.into(),
            value,
        });
        self
    }

    /// Set the inclusive numeric range constraint on the ranking field.
    #[must_use]
    pub fn range(
        mut self,
        field: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        self.range = Some(RangeConstraint {
            field: field.into(),
            min: min.into(),
            max: max.into(),
        });
        self
    }

    /// True when no constraint is present (identity transform).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.equals.is_empty() && self.range.is_none()
    }

    /// Drop constraints that reference fields outside the known set.
    ///
    /// Unknown field names are no-op constraints, not errors; screens with
    /// a declared field schema prune them before evaluation.
    pub fn retain_known_fields(&mut self, known: &[String]) {
        let is_known = |field: &str| known.iter().any(|k| k == field);

        self.equals.retain(|c| is_known(&c.field));
        if self.range.as_ref().is_some_and(|r| !is_known(&r.field)) {
            self.range = None;
        }
        if let Some(search) = &mut self.search {
            search.fields.retain(|f| is_known(f));
            if search.fields.is_empty() {
                self.search = None;
            }
        }
    }

    pub(crate) const fn search_spec(&self) -> Option<&SearchSpec> {
        self.search.as_ref()
    }

    pub(crate) fn equals_constraints(&self) -> &[EqualsConstraint] {
        &self.equals
    }

    pub(crate) const fn range_constraint(&self) -> Option<&RangeConstraint> {
        self.range.as_ref()
    }
}

fn is_sentinel(value: &Value) -> bool {
    value
        .as_text()
        .is_some_and(|text| NO_CONSTRAINT_SENTINELS.contains(&text.to_lowercase().as_str()))
}
