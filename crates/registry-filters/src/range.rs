//! Range field parsing and number-of-workers validation.
//!
//! [`parse_range`] is lenient: it never fails, and reports unparseable
//! input as NaN. [`validate_worker_count_text`] is the strict check applied
//! when a claim or facility form is submitted, returning the message to
//! show next to the field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static SINGLE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static NUMBER_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\s*-\s*([0-9]+)$").expect("valid regex"));

/// A parsed numeric range.
///
/// `max` is `None` when the input named a minimum but no maximum (`"5-"`).
/// NaN marks a bound that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeField {
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RangeField {
    /// Creates a range with both bounds.
    pub fn new(min: f64, max: f64) -> Self {
        RangeField {
            min,
            max: Some(max),
        }
    }

    /// Creates a range with only a minimum.
    pub fn min_only(min: f64) -> Self {
        RangeField { min, max: None }
    }

    /// A range whose bounds are both `value`.
    pub fn exact(value: f64) -> Self {
        RangeField::new(value, value)
    }

    fn unparseable() -> Self {
        RangeField::exact(f64::NAN)
    }

    /// Returns `true` if either bound is NaN.
    pub fn is_nan(&self) -> bool {
        self.min.is_nan() || self.max.is_some_and(f64::is_nan)
    }
}

/// The loosely-typed input accepted by [`parse_range`].
///
/// Form fields and query strings hand over numbers, text, repeated values,
/// explicit nulls, absent values, or something else entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeInput {
    Number(f64),
    Text(String),
    List(Vec<RangeInput>),
    Null,
    Undefined,
    Other,
}

impl From<f64> for RangeInput {
    fn from(n: f64) -> Self {
        RangeInput::Number(n)
    }
}

impl From<i64> for RangeInput {
    fn from(n: i64) -> Self {
        RangeInput::Number(n as f64)
    }
}

impl From<&str> for RangeInput {
    fn from(s: &str) -> Self {
        RangeInput::Text(s.to_string())
    }
}

impl From<String> for RangeInput {
    fn from(s: String) -> Self {
        RangeInput::Text(s)
    }
}

impl From<Option<&str>> for RangeInput {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => RangeInput::from(s),
            None => RangeInput::Undefined,
        }
    }
}

impl From<&serde_json::Value> for RangeInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RangeInput::Null,
            serde_json::Value::Number(n) => n.as_f64().map(RangeInput::Number).unwrap_or(RangeInput::Other),
            serde_json::Value::String(s) => RangeInput::Text(s.clone()),
            serde_json::Value::Array(items) => RangeInput::List(items.iter().map(RangeInput::from).collect()),
            _ => RangeInput::Other,
        }
    }
}

/// Parses a range field.
///
/// | Input | Result |
/// |-------|--------|
/// | `10` | `{10, 10}` |
/// | `"10-20"` | `{10, 20}` |
/// | `"5-"` | `{5}` |
/// | `"-5-10"` | `{0, 10}` |
/// | `"12"` / `"abc"` | `{12, 12}` / `{NaN, NaN}` |
/// | `""`, `Null`, empty list | `{0, 0}` |
/// | `Undefined`, `Other` | `{NaN, NaN}` |
///
/// A non-empty list parses its first element.
///
/// ```
/// use registry_filters::{parse_range, RangeField, RangeInput};
///
/// assert_eq!(parse_range(&RangeInput::from("10-20")), RangeField::new(10.0, 20.0));
/// assert!(parse_range(&RangeInput::Undefined).is_nan());
/// ```
pub fn parse_range(input: &RangeInput) -> RangeField {
    match input {
        RangeInput::Number(n) => RangeField::exact(*n),
        RangeInput::Null => RangeField::exact(0.0),
        RangeInput::List(items) => match items.first() {
            Some(first) => parse_range(first),
            None => RangeField::exact(0.0),
        },
        RangeInput::Text(text) => parse_range_text(text),
        RangeInput::Undefined | RangeInput::Other => RangeField::unparseable(),
    }
}

fn parse_range_text(text: &str) -> RangeField {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return RangeField::exact(0.0);
    }

    // "-5-10": the leading sign marks a range starting below zero, which
    // clamps to zero.
    if let Some(rest) = trimmed.strip_prefix('-') {
        if let Some((low, high)) = rest.split_once('-') {
            if SINGLE_NUMBER.is_match(low.trim()) {
                return range_with_max(0.0, high);
            }
        }
    }

    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if unsigned.contains('-') {
        let parts: Vec<&str> = trimmed.split('-').collect();
        if let [low, high] = parts.as_slice() {
            return range_with_max(parse_leading_int(low), high);
        }
        return RangeField::unparseable();
    }

    RangeField::exact(parse_number(trimmed))
}

fn range_with_max(min: f64, high: &str) -> RangeField {
    if high.trim().is_empty() {
        RangeField::min_only(min)
    } else {
        RangeField::new(min, parse_leading_int(high))
    }
}

/// Integer parse in the manner of a browser `parseInt`: leading whitespace
/// and sign are accepted, then the longest digit prefix is read.
fn parse_leading_int(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }
    digits[..end]
        .parse::<f64>()
        .map(|n| sign * n)
        .unwrap_or(f64::NAN)
}

/// Whole-string numeric coercion, following a browser `Number()`:
/// decimal and exponent notation, `Infinity` with an optional sign, and
/// unsigned `0x`/`0o`/`0b` integer literals.
fn parse_number(s: &str) -> f64 {
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix_literal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_literal {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    let numeric_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric_chars {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Why a number-of-workers entry was rejected.
///
/// The `Display` text is the message shown under the form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkerCountError {
    /// Zero, or a range with a zero endpoint.
    #[error("The value of zero is not valid. Enter a positive whole number or a valid range (e.g., 1-5).")]
    Zero,

    /// A multi-digit value written with a leading zero.
    #[error("The number of workers cannot start from zero.")]
    LeadingZero,

    /// A range whose minimum exceeds its maximum.
    #[error("The minimum number of workers must be less than or equal to the maximum number of workers.")]
    ReversedRange,

    /// Anything that is not a whole number or a range of whole numbers.
    #[error("Enter the number of workers as a whole number or a range (e.g., 100 or 100-150).")]
    InvalidFormat,
}

fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

fn is_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

/// Validates number-of-workers text at form submission.
///
/// Returns `None` when the input is acceptable. Checks run in order: zero,
/// leading zero, reversed range. Input that matches neither the single
/// number nor the range shape is an [`WorkerCountError::InvalidFormat`],
/// which is also how `"010-"` is reported.
///
/// ```
/// use registry_filters::{validate_worker_count_text, WorkerCountError};
///
/// assert_eq!(validate_worker_count_text("100-150"), None);
/// assert_eq!(validate_worker_count_text("1-0"), Some(WorkerCountError::Zero));
/// ```
pub fn validate_worker_count_text(input: &str) -> Option<WorkerCountError> {
    let trimmed = input.trim();

    if SINGLE_NUMBER.is_match(trimmed) {
        if is_zero(trimmed) {
            return Some(WorkerCountError::Zero);
        }
        if has_leading_zero(trimmed) {
            return Some(WorkerCountError::LeadingZero);
        }
        if trimmed.parse::<u64>().is_err() {
            return Some(WorkerCountError::InvalidFormat);
        }
        return None;
    }

    let Some(caps) = NUMBER_RANGE.captures(trimmed) else {
        return Some(WorkerCountError::InvalidFormat);
    };
    let (low, high) = (&caps[1], &caps[2]);

    if is_zero(low) || is_zero(high) {
        return Some(WorkerCountError::Zero);
    }
    if has_leading_zero(low) || has_leading_zero(high) {
        return Some(WorkerCountError::LeadingZero);
    }
    match (low.parse::<u64>(), high.parse::<u64>()) {
        (Ok(min), Ok(max)) if min > max => Some(WorkerCountError::ReversedRange),
        (Ok(_), Ok(_)) => None,
        _ => Some(WorkerCountError::InvalidFormat),
    }
}

/// Looser accept/reject check used to gate form submission.
///
/// Accepts whole numbers of at least one, or ranges of them with
/// `min <= max`. Leading zeros are not rejected here.
pub fn is_valid_number_of_workers(input: &str) -> bool {
    let trimmed = input.trim();

    if SINGLE_NUMBER.is_match(trimmed) {
        return trimmed.parse::<u64>().is_ok_and(|n| n >= 1);
    }

    match NUMBER_RANGE.captures(trimmed) {
        Some(caps) => match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
            (Ok(min), Ok(max)) => min >= 1 && max >= 1 && min <= max,
            _ => false,
        },
        None => false,
    }
}
