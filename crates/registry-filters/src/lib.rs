//! Registry Filters - filter state codec and list utilities for the facility
//! registry front-end.
//!
//! The search page, facility lists, claims table and moderation queue all
//! keep their filters in the URL. This crate owns that mapping and the
//! small pieces of arithmetic the tables share:
//!
//! - Option codec: raw values to `{value, label}` pairs
//! - Range parsing and number-of-workers validation
//! - Filter state ⇄ canonical query string
//! - Label reconciliation once reference data loads
//! - Stable, case and accent insensitive table sorting
//! - Pagination bounds and query-string defaults
//!
//! # Quick Start
//!
//! ```rust
//! use registry_filters::{deserialize, flat_source, serialize, FacetOption, Facet, SerializeOptions};
//!
//! // A deep link arrives.
//! let mut state = deserialize("?countries=US&contributors=57&contributors=89");
//! assert_eq!(state.contributors[0].label, "57");
//!
//! // The contributor list finishes loading.
//! let contributors = flat_source(vec![FacetOption::new(57, "Alvarez PLC")]);
//! state.reconcile_facet(Facet::Contributors, &contributors);
//! assert_eq!(state.contributors, vec![FacetOption::new(57, "Alvarez PLC")]);
//!
//! // The user adds a country; the URL is rebuilt.
//! state.countries.push(FacetOption::text("CN"));
//! assert_eq!(
//!     serialize(&state, SerializeOptions::default()),
//!     "contributors=57&countries=CN&countries=US"
//! );
//! ```
//!
//! # Failure Model
//!
//! Decoding never fails. Malformed input degrades to defaults: empty facets,
//! the default ordering, NaN ranges. [`FilterError`] is only returned where
//! structured input (filter state JSON, reference data, configuration)
//! enters the crate.
//!
//! # Sorting
//!
//! | Column value | Ascending | Descending |
//! |--------------|-----------|------------|
//! | Text | folded (case and accents ignored) | reversed |
//! | Number / Timestamp | numeric | reversed |
//! | `None` (null) | last | first |
//!
//! Ties keep their original order.

mod codec;
mod config;
mod error;
mod option;
mod pagination;
mod params;
mod range;
mod reconcile;
mod sort;
mod sort_algorithm;
mod state;
mod traits;
mod value;

// Re-export public API
pub use codec::{
    deserialize, serialize, SerializeOptions, BOUNDARY_KEY, COMBINE_CONTRIBUTORS_KEY, DETAIL_KEY,
    EMBED_KEY, FREE_TEXT_KEY, NATIVE_LANGUAGE_NAME_KEY, SORT_BY_KEY,
};
pub use config::{EnvReader, FilterConfig, MockEnv, RealEnv, ROWS_PER_PAGE_ENV};
pub use error::{FilterError, Result};
pub use option::{options_from_param, to_option, values_of, FacetOption, OptionValue, ParamValue};
pub use pagination::{
    paginate, pagination_from_query_string, slice_bounds, Pagination, DEFAULT_PAGE, PAGE_KEY,
    ROWS_PER_PAGE_KEY,
};
pub use params::QueryParams;
pub use range::{
    is_valid_number_of_workers, parse_range, validate_worker_count_text, RangeField, RangeInput,
    WorkerCountError,
};
pub use reconcile::{
    flat_source, flatten_source, parse_source, reconcile_labels, OptionGroup, SourceEntry,
};
pub use sort::{
    compare_in_direction, descending_comparator, make_comparator, make_comparator_with,
    sort_records, stable_sort, Dir, SortState,
};
pub use sort_algorithm::{
    default_sort_algorithm, resolve_sort_algorithm, SortAlgorithm, SORT_ALGORITHMS,
};
pub use state::{Facet, FilterState};
pub use traits::{SortField, Sortable};
pub use value::{compare_values, fold_text, Number, Timestamp, Value};
