//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog database could not be opened
    #[error("Database error: {0}")]
    Store(#[from] autoparts_store::StoreError),

    /// Search failed
    #[error(transparent)]
    Search(#[from] autoparts_search::SearchError),

    /// Analog resolution failed
    #[error("Analog lookup failed: {0}")]
    Analogs(#[from] autoparts_analogs::AnalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
