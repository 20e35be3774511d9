//! Label reconciliation against reference data.
//!
//! Options decoded from a URL carry their value as a placeholder label.
//! When the option list for a facet (contributors, parent companies,
//! lists) finishes loading, [`reconcile_labels`] swaps in the real labels
//! and drops options that no longer exist upstream, typically ids from a
//! stale link. Each facet is reconciled on its own as its list arrives.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::option::{FacetOption, OptionValue};

/// A labeled group of options, as returned by grouped option endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<FacetOption>,
}

/// One entry of a reference list: a plain option or a group of options.
///
/// Endpoints return either shape; a list may even mix them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceEntry {
    Group(OptionGroup),
    Option(FacetOption),
}

impl From<FacetOption> for SourceEntry {
    fn from(option: FacetOption) -> Self {
        SourceEntry::Option(option)
    }
}

impl From<OptionGroup> for SourceEntry {
    fn from(group: OptionGroup) -> Self {
        SourceEntry::Group(group)
    }
}

/// Wraps a flat option list as reference data.
pub fn flat_source(options: Vec<FacetOption>) -> Vec<SourceEntry> {
    options.into_iter().map(SourceEntry::Option).collect()
}

/// Flattens reference data into one option list, groups expanded in place.
pub fn flatten_source(source: &[SourceEntry]) -> Vec<&FacetOption> {
    source
        .iter()
        .flat_map(|entry| match entry {
            SourceEntry::Option(option) => std::slice::from_ref(option).iter(),
            SourceEntry::Group(group) => group.options.iter(),
        })
        .collect()
}

/// Decodes reference data from an API response body.
pub fn parse_source(json: &str) -> Result<Vec<SourceEntry>> {
    serde_json::from_str(json).map_err(FilterError::InvalidReferenceData)
}

/// Relabels `current` from `source`.
///
/// Each option whose value appears in `source` takes the source's label;
/// the rest are dropped. Output order follows `current`. When a value
/// appears more than once in `source`, the first occurrence wins.
///
/// ```
/// use registry_filters::{flat_source, reconcile_labels, FacetOption};
///
/// let current = vec![FacetOption::new(57, "57"), FacetOption::new(89, "89")];
/// let source = flat_source(vec![
///     FacetOption::new(57, "Alvarez PLC"),
///     FacetOption::new(14, "Arnold-Adams"),
/// ]);
///
/// assert_eq!(
///     reconcile_labels(&current, &source),
///     vec![FacetOption::new(57, "Alvarez PLC")]
/// );
/// ```
pub fn reconcile_labels(current: &[FacetOption], source: &[SourceEntry]) -> Vec<FacetOption> {
    let mut labels: HashMap<&OptionValue, &str> = HashMap::new();
    for option in flatten_source(source) {
        labels.entry(&option.value).or_insert(option.label.as_str());
    }

    current
        .iter()
        .filter_map(|option| match labels.get(&option.value) {
            Some(label) => Some(FacetOption::new(option.value.clone(), *label)),
            None => {
                tracing::debug!(value = %option.value, "dropping option missing from reference data");
                None
            }
        })
        .collect()
}
