//! Implementation of the `#[derive(Sortable)]` macro.
//!
//! Generates the column accessor used by the table comparators, plus a
//! constant per sortable column.

mod attrs;
mod derive;

pub use derive::sortable_derive_impl;
