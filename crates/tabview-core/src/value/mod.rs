mod compare;


use chrono::{DateTime, TimeZone, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp};

///
/// CONSTANTS
///

const F64_SAFE_I64: i64 = 1i64 << 53;
const F64_SAFE_U64: u64 = 1u64 << 53;

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Float64
///
/// Totally ordered f64 wrapper. Ordering uses `f64::total_cmp`, so NaN
/// sorts after every ordered float and comparison never panics.
///

#[derive(Clone, Copy, Debug, Default, Display, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

///
/// Timestamp
///
/// UTC instant used by datasets with date columns (billing history,
/// generation timestamps). Stored with second precision.
///

#[derive(
    Clone, Copy, Debug, Display, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub fn from_seconds(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[must_use]
    pub const fn inner(&self) -> DateTime<Utc> {
        self.0
    }

    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

///
/// Value
///
/// Scalar cell value for tabular rows. Enum-like columns (country, industry,
/// plan tier) are carried as `Text`; numeric ranking columns may mix `Int`,
/// `Uint`, and `Float` across rows and still compare numerically.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
}

impl Value {
    /// Canonical variant rank for the total cross-variant ordering.
    ///
    /// Numeric variants share one rank so mixed numeric columns compare by
    /// magnitude, not by variant.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Uint(_) | Self::Float(_) => 2,
            Self::Timestamp(_) => 3,
            Self::Text(_) => 4,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Widen a numeric variant to f64.
    ///
    /// Returns `None` for non-numeric variants or integers outside the f64
    /// safe range, where widening would silently lose precision.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        use num_traits::ToPrimitive;

        match self {
            Self::Int(n) if n.unsigned_abs() <= F64_SAFE_I64.unsigned_abs() => n.to_f64(),
            Self::Uint(n) if *n <= F64_SAFE_U64 => n.to_f64(),
            Self::Float(f) => Some(f.get()),
            _ => None,
        }
    }

    /// Substring match between two text values.
    ///
    /// Returns `None` when either side is not text; callers treat that as a
    /// non-match.
    #[must_use]
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        let haystack = self.as_text()?;
        let needle = needle.as_text()?;

        Some(match mode {
            TextMode::Cs => haystack.contains(needle),
            TextMode::Ci => haystack
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        })
    }

    /// Casefolded text rendering used by the sort comparator for
    /// non-numeric columns.
    #[must_use]
    pub fn sort_text(&self) -> String {
        match self {
            Self::Text(text) => text.to_lowercase(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Uint(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Timestamp(ts) => ts.to_string(),
            Self::Null => String::new(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(Float64::new(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}
