//! Proc macros for Registry Filters.
//!
//! # Available Macros
//!
//! - [`Sortable`] - Generate the column accessor used by table sorting
//!
//! For working examples, see `registry-filters/tests/sortable_derive.rs`.

mod sortable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Sortable` trait for table records.
///
/// Only fields marked with `#[sort]` become sortable columns. Each field type
/// must implement `registry_filters::SortField`, which covers strings,
/// numbers, booleans, timestamps and `Option`s of those.
///
/// # Field Attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[sort]` | Column keyed by the field name |
/// | `#[sort(rename = "key")]` | Column keyed by `key` |
/// | `#[sort(skip)]` | Not sortable |
///
/// # Generated Code
///
/// 1. A `&'static str` constant per column, named in SCREAMING_SNAKE_CASE
/// 2. An implementation of `Sortable::sort_value()`; unknown keys yield `Value::None`
///
/// # Example
///
/// ```ignore
/// use registry_filters::{sort_records, Dir, SortState};
/// use registry_filters_macros::Sortable;
///
/// #[derive(Clone, Sortable)]
/// struct Claim {
///     #[sort]
///     facility_name: String,
///
///     #[sort(rename = "claimDecisionDate")]
///     decided_at: Option<i64>,
///
///     notes: String,
/// }
///
/// let state = SortState::new(Claim::FACILITY_NAME, Dir::Asc);
/// let sorted = sort_records(&claims, &state);
/// ```
#[proc_macro_derive(Sortable, attributes(sort))]
pub fn sortable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    sortable::sortable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
