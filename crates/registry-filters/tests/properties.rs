//! Behavioural guarantees of the filter codec, range parser, sort utility,
//! pagination and reconciliation, checked through the public API.

use std::collections::BTreeSet;

use registry_filters::{
    deserialize, flat_source, make_comparator, parse_range, reconcile_labels, serialize,
    slice_bounds, stable_sort, validate_worker_count_text, Dir, Facet, FacetOption, FilterState,
    OptionGroup, OptionValue, RangeField, RangeInput, SerializeOptions, SourceEntry,
    WorkerCountError,
};
use serde_json::json;

fn value_set(options: &[FacetOption]) -> BTreeSet<OptionValue> {
    options.iter().map(|option| option.value.clone()).collect()
}

// =============================================================================
// Filter codec
// =============================================================================

#[test]
fn round_trip_preserves_facet_value_sets() {
    let mut state = FilterState::default();
    state.facility_free_text_query = "knit & dye".into();
    state.contributors = vec![FacetOption::new(89, "Hall Group"), FacetOption::new(57, "Alvarez PLC")];
    state.countries = vec![FacetOption::text("US"), FacetOption::text("CN")];
    state.sectors = vec![FacetOption::text("Apparel"), FacetOption::text("Home Textiles")];
    state.statuses = vec![FacetOption::text("PENDING")];
    state.lists = vec![FacetOption::new(12, "My list")];
    state.number_of_workers = vec![FacetOption::text("100-150")];
    state.moderation_statuses = vec![FacetOption::text("APPROVED")];

    let decoded = deserialize(&serialize(&state, SerializeOptions::default()));

    for facet in Facet::ALL {
        assert_eq!(
            value_set(decoded.facet(facet)),
            value_set(state.facet(facet)),
            "{facet}"
        );
    }
    assert_eq!(decoded.facility_free_text_query, "knit & dye");
}

#[test]
fn empty_state_serializes_to_nothing() {
    assert_eq!(serialize(&FilterState::default(), SerializeOptions::default()), "");
}

#[test]
fn deserialize_repeated_contributors() {
    let state = deserialize("?contributors=1&contributors=2");

    assert_eq!(
        state.contributors,
        vec![FacetOption::new(1, "1"), FacetOption::new(2, "2")]
    );
    for facet in Facet::ALL.into_iter().filter(|f| *f != Facet::Contributors) {
        assert!(state.facet(facet).is_empty(), "{facet}");
    }
    assert_eq!(state.facility_free_text_query, "");
    assert_eq!(state.native_language_name, "");
    assert_eq!(state.combine_contributors, "");
    assert_eq!(state.boundary, None);
    assert_eq!(state.sort_algorithm, FacetOption::text("name_asc").with_label("A to Z"));
}

// =============================================================================
// Range parsing and worker validation
// =============================================================================

#[test]
fn parse_range_examples() {
    assert_eq!(parse_range(&RangeInput::from(10.0)), RangeField::new(10.0, 10.0));
    assert_eq!(parse_range(&RangeInput::from("10-20")), RangeField::new(10.0, 20.0));
    assert_eq!(parse_range(&RangeInput::from("")), RangeField::new(0.0, 0.0));

    let undefined = parse_range(&RangeInput::Undefined);
    assert!(undefined.min.is_nan());
    assert!(undefined.max.is_some_and(f64::is_nan));
}

#[test]
fn worker_count_messages() {
    for zero in ["0", "0-3", "1-0"] {
        assert_eq!(validate_worker_count_text(zero), Some(WorkerCountError::Zero), "{zero}");
    }
    assert_eq!(
        validate_worker_count_text("500-300"),
        Some(WorkerCountError::ReversedRange)
    );
    for invalid in ["1-", "some text", "3.9"] {
        assert_eq!(
            validate_worker_count_text(invalid),
            Some(WorkerCountError::InvalidFormat),
            "{invalid}"
        );
    }
}

#[test]
fn worker_count_messages_are_user_facing() {
    assert!(WorkerCountError::Zero.to_string().contains("value of zero"));
    assert!(WorkerCountError::ReversedRange
        .to_string()
        .contains("less than or equal to"));
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn slice_bounds_examples() {
    assert_eq!(slice_bounds(0, 20), 0..20);
    assert_eq!(slice_bounds(1, 20), 20..40);
    assert_eq!(slice_bounds(7, 25), 175..200);
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn name_sort_is_case_insensitive_and_stable() {
    let rows = vec![
        json!({"name": "Facility Beta"}),
        json!({"name": "facility beta (lowercase)"}),
        json!({"name": "Facility Alpha"}),
    ];

    let sorted = stable_sort(&rows, make_comparator(Dir::Asc, "name"));
    let names: Vec<&str> = sorted.iter().filter_map(|row| row["name"].as_str()).collect();

    assert_eq!(
        names,
        vec!["Facility Alpha", "Facility Beta", "facility beta (lowercase)"]
    );
}

#[test]
fn equal_names_keep_their_order() {
    let rows = vec![
        json!({"name": "Mill", "id": 1}),
        json!({"name": "MILL", "id": 2}),
        json!({"name": "Dye House", "id": 3}),
        json!({"name": "mill", "id": 4}),
    ];

    let ids: Vec<i64> = stable_sort(&rows, make_comparator(Dir::Asc, "name"))
        .iter()
        .filter_map(|row| row["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
}

#[test]
fn null_decision_date_sorts_last_ascending() {
    let claims = vec![
        json!({"id": 1, "claim_decision_date": "2021-03-02"}),
        json!({"id": 2, "claim_decision_date": null}),
        json!({"id": 3, "claim_decision_date": "2020-11-20"}),
    ];

    let ids: Vec<i64> = stable_sort(&claims, make_comparator(Dir::Asc, "claim_decision_date"))
        .iter()
        .filter_map(|row| row["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let ids: Vec<i64> = stable_sort(&claims, make_comparator(Dir::Desc, "claim_decision_date"))
        .iter()
        .filter_map(|row| row["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn accented_names_sort_with_their_base_letters() {
    let rows = vec![
        json!({"name": "Zeta"}),
        json!({"name": "Égypte Mill"}),
        json!({"name": "East Works"}),
    ];

    let sorted = stable_sort(&rows, make_comparator(Dir::Asc, "name"));
    let names: Vec<&str> = sorted.iter().filter_map(|row| row["name"].as_str()).collect();
    assert_eq!(names, vec!["East Works", "Égypte Mill", "Zeta"]);
}

#[test]
fn other_scripts_sort_after_latin_names() {
    let rows = vec![
        json!({"name": "北京 Mill"}),
        json!({"name": "Ωmega"}),
        json!({"name": "Zeta"}),
    ];

    let sorted = stable_sort(&rows, make_comparator(Dir::Asc, "name"));
    let names: Vec<&str> = sorted.iter().filter_map(|row| row["name"].as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Ωmega", "北京 Mill"]);
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn reconcile_relabels_and_drops() {
    let source = flat_source(vec![
        FacetOption::new(57, "Alvarez PLC"),
        FacetOption::new(14, "Arnold-Adams"),
    ]);

    let current = vec![FacetOption::new(57, "57"), FacetOption::new(89, "89")];
    assert_eq!(
        reconcile_labels(&current, &source),
        vec![FacetOption::new(57, "Alvarez PLC")]
    );
}

#[test]
fn reconcile_is_idempotent_across_grouped_sources() {
    let source = vec![
        SourceEntry::Group(OptionGroup {
            label: "Brands".into(),
            options: vec![FacetOption::new(3, "Brand C")],
        }),
        SourceEntry::Option(FacetOption::new(1, "Supplier A")),
    ];
    let current = vec![FacetOption::new(1, "1"), FacetOption::new(3, "3")];

    let once = reconcile_labels(&current, &source);
    assert_eq!(
        once,
        vec![FacetOption::new(1, "Supplier A"), FacetOption::new(3, "Brand C")]
    );
    assert_eq!(reconcile_labels(&once, &source), once);
}
