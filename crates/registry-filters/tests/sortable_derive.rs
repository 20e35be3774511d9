//! Integration tests for the Sortable derive macro.
//!
//! These tests verify that `#[derive(Sortable)]` generates column accessors
//! and key constants that plug into the table sort helpers.

#![allow(dead_code)] // Some fields are intentionally not sortable

use registry_filters::{
    make_comparator, make_comparator_with, sort_records, stable_sort, Dir, Number, SortState,
    Sortable, Timestamp, Value,
};
use registry_filters_macros::Sortable as DeriveSortable;

// =============================================================================
// Basic derive tests
// =============================================================================

#[derive(Debug, Clone, DeriveSortable)]
struct Claim {
    #[sort]
    facility_name: String,

    #[sort(rename = "contributorName")]
    contributor: String,

    #[sort(rename = "claimDecisionDate")]
    decided_at: Option<Timestamp>,

    #[sort]
    workers: u32,

    #[sort(skip)]
    notes: String,

    internal_id: u64,
}

fn claim(facility_name: &str, decided_at: Option<i64>, workers: u32) -> Claim {
    Claim {
        facility_name: facility_name.to_string(),
        contributor: "Alvarez PLC".to_string(),
        decided_at: decided_at.map(Timestamp),
        workers,
        notes: String::new(),
        internal_id: 0,
    }
}

#[test]
fn test_column_constants_generated() {
    assert_eq!(Claim::FACILITY_NAME, "facility_name");
    assert_eq!(Claim::CONTRIBUTOR_NAME, "contributorName");
    assert_eq!(Claim::CLAIM_DECISION_DATE, "claimDecisionDate");
    assert_eq!(Claim::WORKERS, "workers");
}

#[test]
fn test_sort_values() {
    let claim = claim("Mill", Some(1_600_000_000_000), 120);

    assert_eq!(claim.sort_value("facility_name"), Value::String("Mill"));
    assert_eq!(claim.sort_value("contributorName"), Value::String("Alvarez PLC"));
    assert_eq!(
        claim.sort_value("claimDecisionDate"),
        Value::Timestamp(Timestamp(1_600_000_000_000))
    );
    assert_eq!(claim.sort_value("workers"), Value::Number(Number::U64(120)));
}

#[test]
fn test_unannotated_and_skipped_fields_return_none() {
    let claim = claim("Mill", None, 1);

    assert_eq!(claim.sort_value("notes"), Value::None);
    assert_eq!(claim.sort_value("internal_id"), Value::None);
    assert_eq!(claim.sort_value("contributor"), Value::None);
    assert_eq!(claim.sort_value(""), Value::None);
}

#[test]
fn test_none_option_is_null() {
    let claim = claim("Mill", None, 1);
    assert_eq!(claim.sort_value(Claim::CLAIM_DECISION_DATE), Value::None);
}

// =============================================================================
// Integration with sorting
// =============================================================================

#[test]
fn test_sort_records_by_name() {
    let claims = vec![
        claim("Facility Beta", None, 1),
        claim("facility beta (lowercase)", None, 2),
        claim("Facility Alpha", None, 3),
    ];

    let sorted = sort_records(&claims, &SortState::new(Claim::FACILITY_NAME, Dir::Asc));
    let names: Vec<&str> = sorted.iter().map(|c| c.facility_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Facility Alpha", "Facility Beta", "facility beta (lowercase)"]
    );
}

#[test]
fn test_null_decision_date_sorts_last_ascending() {
    let claims = vec![
        claim("A", Some(2_000), 1),
        claim("B", None, 1),
        claim("C", Some(1_000), 1),
    ];

    let sorted = stable_sort(&claims, make_comparator(Dir::Asc, Claim::CLAIM_DECISION_DATE));
    let names: Vec<&str> = sorted.iter().map(|c| c.facility_name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_header_clicks() {
    let claims = vec![claim("A", None, 10), claim("B", None, 30), claim("C", None, 20)];
    let mut state = SortState::new(Claim::FACILITY_NAME, Dir::Asc);

    state.request_sort(Claim::WORKERS);
    let workers: Vec<u32> = sort_records(&claims, &state).iter().map(|c| c.workers).collect();
    assert_eq!(workers, vec![10, 20, 30]);

    state.request_sort(Claim::WORKERS);
    let workers: Vec<u32> = sort_records(&claims, &state).iter().map(|c| c.workers).collect();
    assert_eq!(workers, vec![30, 20, 10]);
}

#[test]
fn test_accessor_function() {
    let claims = vec![claim("B", None, 1), claim("a", None, 2)];
    let sorted = stable_sort(
        &claims,
        make_comparator_with(Dir::Asc, Claim::FACILITY_NAME, Claim::accessor),
    );
    assert_eq!(sorted[0].facility_name, "a");
}

// =============================================================================
// Generic structs
// =============================================================================

#[derive(Clone, DeriveSortable)]
struct Labeled<T: registry_filters::SortField> {
    #[sort]
    label: String,
    #[sort]
    value: T,
}

#[test]
fn test_generic_struct() {
    let row = Labeled {
        label: "x".to_string(),
        value: 2.5f64,
    };
    assert_eq!(row.sort_value("value"), Value::Number(Number::F64(2.5)));
    assert_eq!(Labeled::<f64>::LABEL, "label");
}
