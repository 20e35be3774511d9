//! Codec configuration.
//!
//! Only the table pagination defaults are configurable. Values come from
//! code, a deserialized settings file, or the environment via an
//! [`EnvReader`], which tests replace with [`MockEnv`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Environment variable overriding [`FilterConfig::default_rows_per_page`].
pub const ROWS_PER_PAGE_ENV: &str = "REGISTRY_ROWS_PER_PAGE";

/// Abstraction over environment variables.
pub trait EnvReader {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Pagination defaults for list tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Rows per page when the query string does not say.
    pub default_rows_per_page: usize,
    /// Choices offered by the rows-per-page selector.
    pub rows_per_page_options: Vec<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            default_rows_per_page: 20,
            rows_per_page_options: vec![10, 20, 50, 100],
        }
    }
}

impl FilterConfig {
    /// Defaults with environment overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_reader(&RealEnv)
    }

    /// Defaults with environment overrides from `env`.
    ///
    /// An empty variable is treated as unset.
    pub fn from_env_reader(env: &dyn EnvReader) -> Result<Self> {
        let config = FilterConfig::default();
        match env.var(ROWS_PER_PAGE_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => config.with_default_rows_per_page_text(&raw),
            None => Ok(config),
        }
    }

    /// Sets the default rows per page.
    pub fn with_default_rows_per_page(mut self, rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(FilterError::config(
                ROWS_PER_PAGE_ENV,
                "0",
                "rows per page must be at least 1",
            ));
        }
        self.default_rows_per_page = rows;
        Ok(self)
    }

    fn with_default_rows_per_page_text(self, raw: &str) -> Result<Self> {
        let rows = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| FilterError::config(ROWS_PER_PAGE_ENV, raw, "expected a whole number"))?;
        self.with_default_rows_per_page(rows)
    }
}
