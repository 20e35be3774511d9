//! Pagination arithmetic for client-side tables.
//!
//! Pages are zero-indexed. The claims, moderation and facility list tables
//! keep `page` and `rowsPerPage` in the URL next to the filters.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::params::QueryParams;

/// Query key for the zero-indexed page.
pub const PAGE_KEY: &str = "page";
/// Query key for the page size.
pub const ROWS_PER_PAGE_KEY: &str = "rowsPerPage";
/// Page used when the query string does not name one.
pub const DEFAULT_PAGE: usize = 0;

/// Computes the `[start, end)` bounds of a page.
///
/// ```
/// use registry_filters::slice_bounds;
///
/// assert_eq!(slice_bounds(7, 25), 175..200);
/// ```
pub fn slice_bounds(page: usize, rows_per_page: usize) -> Range<usize> {
    let start = page.saturating_mul(rows_per_page);
    start..start.saturating_add(rows_per_page)
}

/// Returns the items on `page`, clamped to the slice.
pub fn paginate<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let bounds = slice_bounds(page, rows_per_page);
    let start = bounds.start.min(items.len());
    let end = bounds.end.min(items.len());
    &items[start..end]
}

/// A table's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Pagination {
    /// The first page at the configured page size.
    pub fn first_page(config: &FilterConfig) -> Self {
        Pagination {
            page: DEFAULT_PAGE,
            rows_per_page: config.default_rows_per_page,
        }
    }

    /// The bounds of this page.
    pub fn bounds(&self) -> Range<usize> {
        slice_bounds(self.page, self.rows_per_page)
    }

    /// Number of pages needed for `item_count` items.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.rows_per_page.max(1))
    }

    /// The pairs to write back into the URL.
    pub fn to_query_pairs(&self) -> [(&'static str, String); 2] {
        [
            (PAGE_KEY, self.page.to_string()),
            (ROWS_PER_PAGE_KEY, self.rows_per_page.to_string()),
        ]
    }
}

fn first_number(params: &QueryParams, key: &str) -> Option<usize> {
    let raw = params.first(key)?;
    match raw.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!(key, value = raw, "ignoring non-numeric pagination parameter");
            None
        }
    }
}

/// Reads the table position from a query string.
///
/// Only the first occurrence of each key counts. Missing or non-numeric
/// values, and a page size of zero, fall back to the defaults.
pub fn pagination_from_query_string(query: &str, config: &FilterConfig) -> Pagination {
    let params = QueryParams::parse(query);
    let defaults = Pagination::first_page(config);
    Pagination {
        page: first_number(&params, PAGE_KEY).unwrap_or(defaults.page),
        rows_per_page: first_number(&params, ROWS_PER_PAGE_KEY)
            .filter(|rows| *rows > 0)
            .unwrap_or(defaults.rows_per_page),
    }
}
