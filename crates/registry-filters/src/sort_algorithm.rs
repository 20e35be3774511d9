//! The fixed table of facility search orderings selectable through `sort_by`.

use crate::option::FacetOption;

/// One entry of the search ordering table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortAlgorithm {
    /// The `sort_by` wire value.
    pub value: &'static str,
    /// The label shown in the sort dropdown.
    pub label: &'static str,
}

impl SortAlgorithm {
    /// Converts the entry into a dropdown option.
    pub fn to_option(self) -> FacetOption {
        FacetOption::text(self.value).with_label(self.label)
    }
}

/// Known orderings. The first entry is the default.
pub const SORT_ALGORITHMS: &[SortAlgorithm] = &[
    SortAlgorithm {
        value: "name_asc",
        label: "A to Z",
    },
    SortAlgorithm {
        value: "name_desc",
        label: "Z to A",
    },
    SortAlgorithm {
        value: "contributors_desc",
        label: "Contributors (high to low)",
    },
    SortAlgorithm {
        value: "contributors_asc",
        label: "Contributors (low to high)",
    },
];

/// The default ordering, name ascending.
pub fn default_sort_algorithm() -> SortAlgorithm {
    SORT_ALGORITHMS[0]
}

/// Looks up a `sort_by` value, falling back to the default ordering.
pub fn resolve_sort_algorithm(value: Option<&str>) -> SortAlgorithm {
    let found = value.and_then(|v| SORT_ALGORITHMS.iter().find(|algo| algo.value == v));
    match found {
        Some(algo) => *algo,
        None => {
            if let Some(v) = value {
                tracing::debug!(sort_by = v, "unknown sort_by value, using default ordering");
            }
            default_sort_algorithm()
        }
    }
}
