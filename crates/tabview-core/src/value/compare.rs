use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by the sort engine and range checks.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// All numeric variants share a rank and compare by widened magnitude, so
/// mixed Int/Uint/Float columns remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Strict comparator for orderable pairs.
///
/// Returns `None` for pairs with no meaningful order (e.g. text vs bool).
/// Numeric cross-variant pairs are orderable; everything else must match
/// variants exactly.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        _ if left.is_numeric() && right.is_numeric() => numeric_cmp(left, right),
        _ => None,
    }
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ if left.is_numeric() && right.is_numeric() => {
            numeric_cmp(left, right).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// Compare two numeric values by magnitude.
///
/// Same-variant pairs compare exactly; cross-variant pairs widen to f64.
fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Uint(b)) => Some(cmp_int_uint(*a, *b)),
        (Value::Uint(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),
        _ => {
            let a = left.as_f64()?;
            let b = right.as_f64()?;

            Some(a.total_cmp(&b))
        }
    }
}

const fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    if a < 0 {
        return Ordering::Less;
    }

    let a = a as u64;
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
