//! Error types for search operations

use autoparts_analogs::AnalogError;
use thiserror::Error;

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during a search
///
/// An empty result list means "nothing matched"; a failed lookup is always
/// reported through this type instead.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Catalog or relation store could not be read
    #[error("Search temporarily unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid search configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<AnalogError> for SearchError {
    fn from(err: AnalogError) -> Self {
        match err {
            AnalogError::StoreUnavailable(msg) => SearchError::StoreUnavailable(msg),
        }
    }
}
