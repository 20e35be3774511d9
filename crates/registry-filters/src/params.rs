//! Parsed query-string parameters.

use std::convert::Infallible;
use std::str::FromStr;

use url::form_urlencoded;

use crate::option::ParamValue;

/// A decoded query string, keeping every occurrence of every key in order.
///
/// Parsing never fails: a leading `?` is skipped, `+` decodes to a space
/// and malformed percent escapes are kept literally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a query string, with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        QueryParams { pairs }
    }

    /// Returns the first value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `key`, in order of appearance.
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the field as a single or repeated value, or `None` if absent.
    pub fn param(&self, key: &str) -> Option<ParamValue> {
        let mut values: Vec<String> = self.all(key).map(str::to_string).collect();
        match values.len() {
            0 => None,
            1 => values.pop().map(ParamValue::Single),
            _ => Some(ParamValue::Multiple(values)),
        }
    }

    /// Returns `true` if `key` appears at least once.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of key/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the query string had no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromStr for QueryParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QueryParams::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_question_mark_is_optional() {
        assert_eq!(QueryParams::parse("?a=1"), QueryParams::parse("a=1"));
    }

    #[test]
    fn repeated_keys_keep_order() {
        let params = QueryParams::parse("countries=US&q=mill&countries=CN");
        let countries: Vec<&str> = params.all("countries").collect();
        assert_eq!(countries, vec!["US", "CN"]);
        assert_eq!(params.first("countries"), Some("US"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn param_shapes() {
        let params = QueryParams::parse("a=1&b=2&b=3");
        assert_eq!(params.param("a"), Some(ParamValue::Single("1".into())));
        assert_eq!(
            params.param("b"),
            Some(ParamValue::Multiple(vec!["2".into(), "3".into()]))
        );
        assert_eq!(params.param("c"), None);
    }

    #[test]
    fn decodes_plus_and_percent() {
        let params = QueryParams::parse("q=cotton+mill&name=%C3%A7");
        assert_eq!(params.first("q"), Some("cotton mill"));
        assert_eq!(params.first("name"), Some("ç"));
    }

    #[test]
    fn garbled_input_does_not_fail() {
        let params: QueryParams = "&&=x&q=%zz&flag".parse().unwrap();
        assert_eq!(params.first("q"), Some("%zz"));
        assert!(params.contains_key("flag"));
        assert_eq!(params.first("flag"), Some(""));
    }

    #[test]
    fn empty_query() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }
}
