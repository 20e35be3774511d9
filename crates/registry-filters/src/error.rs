//! Error types for the registry filters crate.
//!
//! Decoding a query string never fails. These errors only surface at the
//! edges where structured input is handed to the crate: filter state JSON,
//! reference data JSON and configuration values.

use thiserror::Error;

/// Errors that can occur when loading structured input.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Filter state JSON could not be decoded.
    #[error("invalid filter state: {0}")]
    InvalidFilterState(#[source] serde_json::Error),

    /// Reference data (option lists or option groups) could not be decoded.
    #[error("invalid reference data: {0}")]
    InvalidReferenceData(#[source] serde_json::Error),

    /// A configuration value was present but unusable.
    #[error("invalid configuration value for {key}: '{value}' ({reason})")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A facet name did not match any known facet.
    #[error("unknown facet: '{0}'")]
    UnknownFacet(String),
}

impl FilterError {
    /// Create a configuration error.
    pub fn config(key: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidConfig {
            key,
            value: value.into(),
            reason,
        }
    }
}

/// Result type for registry filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
