//! Filter state ⇄ query string codec.
//!
//! [`serialize`] produces the canonical query string for a filter state:
//! facet values sorted and de-duplicated, empty fields left out, keys in a
//! fixed order. The same selection therefore always yields the same URL,
//! which the search page also uses as its cache key.
//!
//! [`deserialize`] reads any query string back into a [`FilterState`]
//! without failing. Labels that need a server lookup come back equal to
//! their values until [`reconcile_labels`](crate::reconcile_labels) runs.

use std::collections::BTreeSet;

use url::form_urlencoded;

use crate::option::{options_from_param, FacetOption};
use crate::params::QueryParams;
use crate::sort_algorithm::{default_sort_algorithm, resolve_sort_algorithm};
use crate::state::{Facet, FilterState};

/// Query key for the free-text search.
pub const FREE_TEXT_KEY: &str = "q";
/// Query key for the native-language name facet.
pub const NATIVE_LANGUAGE_NAME_KEY: &str = "native_language_name";
/// Query key for the contributor combination mode.
pub const COMBINE_CONTRIBUTORS_KEY: &str = "combine_contributors";
/// Query key for the GeoJSON boundary.
pub const BOUNDARY_KEY: &str = "boundary";
/// Query key for the search ordering.
pub const SORT_BY_KEY: &str = "sort_by";
/// Query key for the embedded-map flag.
pub const EMBED_KEY: &str = "embed";
/// Query key for the detailed-results flag.
pub const DETAIL_KEY: &str = "detail";

/// Flags appended to a serialized query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    /// Append `embed=1`, for the embedded map.
    pub embed: bool,
    /// Append `detail=true`, asking the API for detailed results.
    pub detail: bool,
}

impl SerializeOptions {
    /// Reads the flags back out of a query string.
    ///
    /// `embed` is set by any non-empty value other than `0`; `detail` only
    /// by `true`.
    pub fn from_query_string(query: &str) -> Self {
        let params = QueryParams::parse(query);
        SerializeOptions {
            embed: params
                .first(EMBED_KEY)
                .is_some_and(|v| !v.is_empty() && v != "0"),
            detail: params.first(DETAIL_KEY) == Some("true"),
        }
    }
}

/// Canonical values of a facet: falsy values dropped, the rest sorted by
/// their text form and de-duplicated.
fn canonical_values(options: &[FacetOption]) -> BTreeSet<String> {
    options
        .iter()
        .filter(|option| !option.value.is_falsy())
        .map(|option| option.value.to_string())
        .collect()
}

fn boundary_json(boundary: &Option<serde_json::Value>) -> Option<String> {
    let value = boundary.as_ref()?;
    let empty = match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    };
    if empty {
        return None;
    }
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::debug!(error = %err, "boundary could not be encoded, leaving it out");
            None
        }
    }
}

/// Builds the canonical query string for `state`.
///
/// The default ordering is left out, since decoding restores it; a state
/// with nothing selected therefore serializes to the empty string.
///
/// ```
/// use registry_filters::{serialize, FacetOption, FilterState, SerializeOptions};
///
/// let mut state = FilterState::default();
/// state.countries = vec![FacetOption::text("US"), FacetOption::text("CN")];
///
/// assert_eq!(serialize(&state, SerializeOptions::default()), "countries=CN&countries=US");
/// assert_eq!(serialize(&FilterState::default(), SerializeOptions::default()), "");
/// ```
pub fn serialize(state: &FilterState, options: SerializeOptions) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if !state.facility_free_text_query.is_empty() {
        out.append_pair(FREE_TEXT_KEY, &state.facility_free_text_query);
    }

    for facet in Facet::ALL {
        for value in canonical_values(state.facet(facet)) {
            out.append_pair(facet.query_key(), &value);
        }
    }

    if !state.native_language_name.is_empty() {
        out.append_pair(NATIVE_LANGUAGE_NAME_KEY, &state.native_language_name);
    }
    if !state.combine_contributors.is_empty() {
        out.append_pair(COMBINE_CONTRIBUTORS_KEY, &state.combine_contributors);
    }
    if let Some(boundary) = boundary_json(&state.boundary) {
        out.append_pair(BOUNDARY_KEY, &boundary);
    }

    let sort_by = state.sort_algorithm.value.to_string();
    if !sort_by.is_empty() && sort_by != default_sort_algorithm().value {
        out.append_pair(SORT_BY_KEY, &sort_by);
    }

    if options.embed {
        out.append_pair(EMBED_KEY, "1");
    }
    if options.detail {
        out.append_pair(DETAIL_KEY, "true");
    }

    out.finish()
}

fn parse_boundary(raw: Option<&str>) -> Option<serde_json::Value> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring unparseable boundary");
            None
        }
    }
}

fn facet_options(facet: Facet, params: &QueryParams) -> Vec<FacetOption> {
    let Some(param) = params.param(facet.query_key()) else {
        return Vec::new();
    };
    if facet.passes_through() {
        let mut options: Vec<FacetOption> = Vec::new();
        for raw in param.values().into_iter().filter(|raw| !raw.is_empty()) {
            let option = FacetOption::text(raw);
            if !options.contains(&option) {
                options.push(option);
            }
        }
        return options;
    }
    options_from_param(&param)
}

/// Reads a query string into a filter state.
///
/// Absent facets are empty, unknown keys are ignored, an unknown or absent
/// `sort_by` selects the default ordering and an unparseable boundary is
/// dropped. Single-valued keys use their first occurrence.
///
/// ```
/// use registry_filters::{deserialize, FacetOption};
///
/// let state = deserialize("?contributors=1&contributors=2");
/// assert_eq!(state.contributors, vec![FacetOption::new(1, "1"), FacetOption::new(2, "2")]);
/// assert_eq!(state.sort_algorithm.label, "A to Z");
/// ```
pub fn deserialize(query: &str) -> FilterState {
    let params = QueryParams::parse(query);
    let mut state = FilterState::default();

    state.facility_free_text_query = params.first(FREE_TEXT_KEY).unwrap_or_default().to_string();
    for facet in Facet::ALL {
        state.set_facet(facet, facet_options(facet, &params));
    }
    state.native_language_name = params
        .first(NATIVE_LANGUAGE_NAME_KEY)
        .unwrap_or_default()
        .to_string();
    state.combine_contributors = params
        .first(COMBINE_CONTRIBUTORS_KEY)
        .unwrap_or_default()
        .to_string();
    state.boundary = parse_boundary(params.first(BOUNDARY_KEY));
    state.sort_algorithm = resolve_sort_algorithm(params.first(SORT_BY_KEY)).to_option();

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionValue;
    use crate::sort_algorithm::SORT_ALGORITHMS;
    use serde_json::json;

    #[test]
    fn empty_state_serializes_to_empty_string() {
        assert_eq!(serialize(&FilterState::default(), SerializeOptions::default()), "");
    }

    #[test]
    fn facet_values_are_sorted_and_deduplicated() {
        let mut state = FilterState::default();
        state.contributors = vec![
            FacetOption::new(2, "Second"),
            FacetOption::new(10, "Tenth"),
            FacetOption::new(2, "Second again"),
        ];

        assert_eq!(
            serialize(&state, SerializeOptions::default()),
            "contributors=10&contributors=2"
        );
    }

    #[test]
    fn falsy_values_are_dropped() {
        let mut state = FilterState::default();
        state.sectors = vec![FacetOption::text(""), FacetOption::text("Apparel")];
        state.lists = vec![FacetOption::new(0, "0")];

        assert_eq!(serialize(&state, SerializeOptions::default()), "sectors=Apparel");
    }

    #[test]
    fn scalars_and_flags() {
        let mut state = FilterState::default();
        state.facility_free_text_query = "cotton mill".into();
        state.native_language_name = "纺织厂".into();
        state.combine_contributors = "AND".into();

        let qs = serialize(
            &state,
            SerializeOptions {
                embed: true,
                detail: true,
            },
        );
        assert_eq!(
            qs,
            "q=cotton+mill&native_language_name=%E7%BA%BA%E7%BB%87%E5%8E%82&combine_contributors=AND&embed=1&detail=true"
        );
    }

    #[test]
    fn sort_by_only_when_not_default() {
        let mut state = FilterState::default();
        state.sort_algorithm = SORT_ALGORITHMS[1].to_option();
        assert_eq!(serialize(&state, SerializeOptions::default()), "sort_by=name_desc");

        state.sort_algorithm = FacetOption::text("");
        assert_eq!(serialize(&state, SerializeOptions::default()), "");
    }

    #[test]
    fn boundary_round_trip() {
        let geometry = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]});
        let mut state = FilterState::default();
        state.boundary = Some(geometry.clone());

        let qs = serialize(&state, SerializeOptions::default());
        assert!(qs.starts_with("boundary="));
        assert_eq!(deserialize(&qs).boundary, Some(geometry));
    }

    #[test]
    fn empty_boundary_is_left_out() {
        let mut state = FilterState::default();
        state.boundary = Some(json!({}));
        assert_eq!(serialize(&state, SerializeOptions::default()), "");
    }

    #[test]
    fn deserialize_defaults() {
        let state = deserialize("");
        assert_eq!(state, FilterState::default());
        assert_eq!(deserialize("?"), FilterState::default());
    }

    #[test]
    fn deserialize_statuses_pass_through() {
        let state = deserialize("statuses=PENDING&statuses=APPROVED&statuses=42");
        assert_eq!(
            state.statuses,
            vec![
                FacetOption::text("PENDING"),
                FacetOption::text("APPROVED"),
                FacetOption::text("42")
            ]
        );
    }

    #[test]
    fn deserialize_coerces_numeric_ids() {
        let state = deserialize("lists=12&parent_company=Acme");
        assert_eq!(state.lists[0].value, OptionValue::Number(12));
        assert_eq!(state.parent_company[0].value, OptionValue::Text("Acme".into()));
    }

    #[test]
    fn deserialize_sort_by() {
        assert_eq!(deserialize("sort_by=contributors_desc").sort_algorithm.value,
            OptionValue::Text("contributors_desc".into()));
        assert_eq!(deserialize("sort_by=nonsense").sort_algorithm.label, "A to Z");
    }

    #[test]
    fn deserialize_bad_boundary_is_none() {
        assert_eq!(deserialize("boundary=%7Bnot-json").boundary, None);
        assert_eq!(deserialize("boundary=").boundary, None);
        assert_eq!(deserialize("boundary=null").boundary, None);
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let state = deserialize("utm_source=newsletter&countries=US&page=2");
        assert_eq!(state.countries, vec![FacetOption::text("US")]);
    }

    #[test]
    fn deserialize_first_scalar_wins() {
        let state = deserialize("q=first&q=second");
        assert_eq!(state.facility_free_text_query, "first");
    }

    #[test]
    fn flags_from_query_string() {
        assert_eq!(
            SerializeOptions::from_query_string("?embed=1&detail=true"),
            SerializeOptions {
                embed: true,
                detail: true
            }
        );
        assert_eq!(
            SerializeOptions::from_query_string("embed=0&detail=1"),
            SerializeOptions::default()
        );
    }
}
