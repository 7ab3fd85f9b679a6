//! Module: record
//! Responsibility: row abstraction and the dynamic field-map record type.
//! Does not own: filtering, ordering, or pagination semantics.
//! Boundary: every engine surface reads rows through `TableRow` only.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// FieldPresence
///
/// Result of reading a field from a row. Distinguishes a missing field
/// from a present field whose value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// TableRow
///
/// Abstraction over a row-like value with a stable identity and named
/// fields. The engine is generic over this, so each dashboard screen can
/// supply its own concrete row type.
///

pub trait TableRow {
    /// Stable unique identifier; selection state is keyed on it.
    fn id(&self) -> &str;

    /// Read a field by name.
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// Record
///
/// Dynamic `TableRow` implementation: a stable id plus an ordered field
/// map. Immutable for the duration of a view session; a record is replaced
/// wholesale or removed, never patched in place.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    id: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl TableRow for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_reads_as_missing() {
        let record = Record::new("r1").with("name", "Acme").with("vais", 87u64);

        assert_eq!(
            record.field("name"),
            FieldPresence::Present(Value::Text("Acme".into()))
        );
        assert_eq!(record.field("nope"), FieldPresence::Missing);
    }

    #[test]
    fn builder_collects_field_names_in_order() {
        let record = Record::new("r1")
            .with("vais", 87u64)
            .with("name", "Acme")
            .with("industry", "SaaS");

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, ["industry", "name", "vais"]);
    }

    #[test]
    fn null_field_is_present_not_missing() {
        let record = Record::new("r1").with("score", Value::Null);

        assert_eq!(record.field("score"), FieldPresence::Present(Value::Null));
    }
}
