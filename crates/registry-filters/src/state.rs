//! The filter state behind facility search, lists and the moderation queue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::option::FacetOption;
use crate::reconcile::{reconcile_labels, SourceEntry};
use crate::sort_algorithm::default_sort_algorithm;

/// A list-valued facet of [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Contributors,
    ContributorTypes,
    Countries,
    Sectors,
    ParentCompany,
    FacilityType,
    ProcessingType,
    ProductType,
    NumberOfWorkers,
    Lists,
    Statuses,
    DataSources,
    ModerationStatuses,
}

impl Facet {
    /// Every facet, in canonical serialization order.
    pub const ALL: [Facet; 13] = [
        Facet::Contributors,
        Facet::ContributorTypes,
        Facet::Countries,
        Facet::Sectors,
        Facet::ParentCompany,
        Facet::FacilityType,
        Facet::ProcessingType,
        Facet::ProductType,
        Facet::NumberOfWorkers,
        Facet::Lists,
        Facet::Statuses,
        Facet::DataSources,
        Facet::ModerationStatuses,
    ];

    /// The repeated query-string key for this facet.
    pub fn query_key(self) -> &'static str {
        match self {
            Facet::Contributors => "contributors",
            Facet::ContributorTypes => "contributor_types",
            Facet::Countries => "countries",
            Facet::Sectors => "sectors",
            Facet::ParentCompany => "parent_company",
            Facet::FacilityType => "facility_type",
            Facet::ProcessingType => "processing_type",
            Facet::ProductType => "product_type",
            Facet::NumberOfWorkers => "number_of_workers",
            Facet::Lists => "lists",
            Facet::Statuses => "statuses",
            Facet::DataSources => "data_sources",
            Facet::ModerationStatuses => "moderation_statuses",
        }
    }

    /// Facets whose values are fixed status names, decoded as text with
    /// the value as label and never looked up.
    pub fn passes_through(self) -> bool {
        matches!(self, Facet::Statuses | Facet::ModerationStatuses)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

impl FromStr for Facet {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Facet::ALL
            .iter()
            .copied()
            .find(|facet| facet.query_key() == s)
            .ok_or_else(|| FilterError::UnknownFacet(s.to_string()))
    }
}

/// The complete set of search filters.
///
/// `Default` is the reset state: every facet empty and the default
/// ordering selected. JSON uses camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub facility_free_text_query: String,
    pub contributors: Vec<FacetOption>,
    pub contributor_types: Vec<FacetOption>,
    pub countries: Vec<FacetOption>,
    pub sectors: Vec<FacetOption>,
    pub parent_company: Vec<FacetOption>,
    pub facility_type: Vec<FacetOption>,
    pub processing_type: Vec<FacetOption>,
    pub product_type: Vec<FacetOption>,
    pub number_of_workers: Vec<FacetOption>,
    pub lists: Vec<FacetOption>,
    pub statuses: Vec<FacetOption>,
    pub data_sources: Vec<FacetOption>,
    pub moderation_statuses: Vec<FacetOption>,
    pub native_language_name: String,
    pub combine_contributors: String,
    pub boundary: Option<serde_json::Value>,
    pub sort_algorithm: FacetOption,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            facility_free_text_query: String::new(),
            contributors: Vec::new(),
            contributor_types: Vec::new(),
            countries: Vec::new(),
            sectors: Vec::new(),
            parent_company: Vec::new(),
            facility_type: Vec::new(),
            processing_type: Vec::new(),
            product_type: Vec::new(),
            number_of_workers: Vec::new(),
            lists: Vec::new(),
            statuses: Vec::new(),
            data_sources: Vec::new(),
            moderation_statuses: Vec::new(),
            native_language_name: String::new(),
            combine_contributors: String::new(),
            boundary: None,
            sort_algorithm: default_sort_algorithm().to_option(),
        }
    }
}

impl FilterState {
    /// Reads a filter state from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FilterError::InvalidFilterState)
    }

    /// Returns the options selected for `facet`.
    pub fn facet(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::Contributors => &self.contributors,
            Facet::ContributorTypes => &self.contributor_types,
            Facet::Countries => &self.countries,
            Facet::Sectors => &self.sectors,
            Facet::ParentCompany => &self.parent_company,
            Facet::FacilityType => &self.facility_type,
            Facet::ProcessingType => &self.processing_type,
            Facet::ProductType => &self.product_type,
            Facet::NumberOfWorkers => &self.number_of_workers,
            Facet::Lists => &self.lists,
            Facet::Statuses => &self.statuses,
            Facet::DataSources => &self.data_sources,
            Facet::ModerationStatuses => &self.moderation_statuses,
        }
    }

    /// Returns the options selected for `facet`, mutably.
    pub fn facet_mut(&mut self, facet: Facet) -> &mut Vec<FacetOption> {
        match facet {
            Facet::Contributors => &mut self.contributors,
            Facet::ContributorTypes => &mut self.contributor_types,
            Facet::Countries => &mut self.countries,
            Facet::Sectors => &mut self.sectors,
            Facet::ParentCompany => &mut self.parent_company,
            Facet::FacilityType => &mut self.facility_type,
            Facet::ProcessingType => &mut self.processing_type,
            Facet::ProductType => &mut self.product_type,
            Facet::NumberOfWorkers => &mut self.number_of_workers,
            Facet::Lists => &mut self.lists,
            Facet::Statuses => &mut self.statuses,
            Facet::DataSources => &mut self.data_sources,
            Facet::ModerationStatuses => &mut self.moderation_statuses,
        }
    }

    /// Replaces the selection of one facet, leaving the others untouched.
    pub fn set_facet(&mut self, facet: Facet, options: Vec<FacetOption>) {
        *self.facet_mut(facet) = options;
    }

    /// Relabels one facet against freshly loaded reference data.
    ///
    /// Options missing from `source` are dropped. Safe to call again each
    /// time the reference list reloads.
    pub fn reconcile_facet(&mut self, facet: Facet, source: &[SourceEntry]) {
        let reconciled = reconcile_labels(self.facet(facet), source);
        self.set_facet(facet, reconciled);
    }

    /// Returns `true` when nothing narrows the search.
    ///
    /// The ordering does not count as a filter.
    pub fn has_no_filters(&self) -> bool {
        self.facility_free_text_query.is_empty()
            && Facet::ALL.iter().all(|facet| self.facet(*facet).is_empty())
            && self.native_language_name.is_empty()
            && self.combine_contributors.is_empty()
            && self.boundary.is_none()
    }
}
