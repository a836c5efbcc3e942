//! Configuration for search operations
//!
//! Defines markup defaults, result caps and analog resolution settings.

use crate::error::{Result, SearchError};
use autoparts_analogs::ResolverConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the search service
///
/// # Examples
///
/// ```
/// use autoparts_search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.default_markup_percent, 25.0);
/// assert_eq!(config.text_result_limit, 30);
///
/// let config = SearchConfig::from_toml_str("default_markup_percent = 15.0").unwrap();
/// assert_eq!(config.default_markup_percent, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Markup applied when the viewer carries no markup of its own
    /// Default: 25%
    pub default_markup_percent: f64,

    /// Maximum primary matches for a free-text query
    /// Default: 30
    pub text_result_limit: usize,

    /// Maximum primary matches from the part-number prefix fallback
    /// Default: 10
    pub prefix_result_limit: usize,

    /// Free-text tokens shorter than this many characters are ignored
    /// Default: 3
    pub min_token_chars: usize,

    /// Maximum number of suggestions returned
    /// Default: 10
    pub suggestion_limit: usize,

    /// Analog resolution settings
    pub resolver: ResolverConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_markup_percent: 25.0,
            text_result_limit: 30,
            prefix_result_limit: 10,
            min_token_chars: 3,
            suggestion_limit: 10,
            resolver: ResolverConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a configuration from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SearchConfig =
            toml::from_str(contents).map_err(|e| SearchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.default_markup_percent.is_finite() || self.default_markup_percent <= -100.0 {
            return Err(SearchError::Config(format!(
                "default_markup_percent must be a finite value above -100, got {}",
                self.default_markup_percent
            )));
        }
        if self.text_result_limit == 0 {
            return Err(SearchError::Config("text_result_limit must be at least 1".into()));
        }
        if self.prefix_result_limit == 0 {
            return Err(SearchError::Config("prefix_result_limit must be at least 1".into()));
        }
        Ok(())
    }
}
