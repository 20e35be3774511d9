//! Runtime value types for record sorting.
//!
//! The [`Value`] enum represents the value of a record field at sort time.
//! Strings are compared after case and accent folding, numbers across their
//! integer and float representations, and [`Value::None`] stands in for a
//! `null` column (an unset claim decision date, for instance).

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use registry_filters::{Value, Number};
///
/// struct Claim {
///     facility_name: String,
///     decision_date: Option<i64>,
/// }
///
/// fn accessor<'a>(claim: &'a Claim, field: &str) -> Value<'a> {
///     match field {
///         "facility_name" => Value::String(&claim.facility_name),
///         "decision_date" => match claim.decision_date {
///             Some(ms) => Value::Number(Number::I64(ms)),
///             None => Value::None,
///         },
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    fn type_rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::Timestamp(_) => 1,
            Value::String(_) => 2,
            Value::Bool(_) => 3,
            Value::None => 4,
        }
    }
}

/// Folds a string for comparison: the text is decomposed (NFD), combining
/// marks are dropped and the result is lowercased, so "Türkiye" and
/// "turkiye" compare equal. Letters of other scripts are kept as they are.
pub fn fold_text(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compares two present values.
///
/// Values of different kinds are ordered by kind (numbers, timestamps,
/// strings, booleans) so the result is always a total order. `None` sorts
/// after everything here; null placement in table sorts is decided by
/// [`descending_comparator`](crate::descending_comparator) instead.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => fold_text(a).cmp(&fold_text(b)),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.type_rank().cmp(&b.type_rank()),
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision.
/// Comparisons between different variants go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total ordering: NaN sorts after every other number.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match self.compare(other) {
            Some(ordering) => ordering,
            None => {
                let a_nan = self.to_f64().is_nan();
                let b_nan = other.to_f64().is_nan();
                a_nan.cmp(&b_nan)
            }
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// Claim and moderation tables sort on creation and decision dates; callers
/// convert from whatever datetime type they hold.
///
/// ```
/// use registry_filters::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);
