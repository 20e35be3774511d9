//! Option codec: raw query-string values to `{value, label}` pairs.
//!
//! Every select in the registry UI works on [`FacetOption`]s. Values read
//! from a URL only carry the raw text, so the label starts out as that text
//! and is replaced later by [`reconcile_labels`](crate::reconcile_labels).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value half of an option.
///
/// Facets keyed by numeric id (contributors, lists) hold `Number`; all
/// others hold `Text`. Matching between the two is strict: `Number(57)`
/// and `Text("57")` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl OptionValue {
    /// Reads a raw query-string value.
    ///
    /// A value made only of ASCII digits becomes `Number`. Anything else,
    /// including `"12abc"`, `"-3"` and digit runs that overflow `i64`, stays
    /// `Text`.
    pub fn parse(raw: &str) -> Self {
        if is_all_digits(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return OptionValue::Number(n);
            }
        }
        OptionValue::Text(raw.to_string())
    }

    /// Returns `true` for values the serializer drops: empty text and zero.
    pub fn is_falsy(&self) -> bool {
        match self {
            OptionValue::Number(n) => *n == 0,
            OptionValue::Text(s) => s.is_empty(),
        }
    }

    /// Extracts the number, if this is a numeric value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            OptionValue::Text(_) => None,
        }
    }

    /// Extracts the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Number(_) => None,
            OptionValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n as i64)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

/// A selectable choice within a facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: OptionValue,
    pub label: String,
}

impl FacetOption {
    /// Creates an option with an explicit label.
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        FacetOption {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Creates a text option whose label equals its value.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        FacetOption {
            label: value.clone(),
            value: OptionValue::Text(value),
        }
    }

    /// Replaces the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Creates an option whose label is the value's display form.
    pub fn placeholder(value: OptionValue) -> Self {
        FacetOption {
            label: value.to_string(),
            value,
        }
    }
}

/// A query-string field: either present once or repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// Normalizes to a list of raw values.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(s) => vec![s.as_str()],
            ParamValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Single(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Single(s)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

fn is_all_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Converts one raw value into an option.
///
/// Returns `None` for empty input. The label keeps the original text even
/// when the value is coerced to a number, so `"007"` becomes
/// `{value: 7, label: "007"}`.
///
/// ```
/// use registry_filters::{to_option, FacetOption};
///
/// assert_eq!(to_option("57"), Some(FacetOption::new(57, "57")));
/// assert_eq!(to_option("US"), Some(FacetOption::new("US", "US")));
/// assert_eq!(to_option(""), None);
/// ```
pub fn to_option(raw: &str) -> Option<FacetOption> {
    if raw.is_empty() {
        return None;
    }
    Some(FacetOption {
        value: OptionValue::parse(raw),
        label: raw.to_string(),
    })
}

/// Converts a single or repeated field into options.
///
/// Empty values (`countries=`) are dropped. A value repeated in the field
/// is kept once, at its first position.
pub fn options_from_param(param: &ParamValue) -> Vec<FacetOption> {
    let mut options: Vec<FacetOption> = Vec::new();
    for raw in param.values() {
        if let Some(option) = to_option(raw) {
            if !options.iter().any(|existing| existing.value == option.value) {
                options.push(option);
            }
        }
    }
    options
}

/// Extracts the values of a list of options, in order.
pub fn values_of(options: &[FacetOption]) -> Vec<OptionValue> {
    options.iter().map(|option| option.value.clone()).collect()
}
