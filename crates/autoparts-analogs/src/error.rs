//! Error types for analog resolution

use thiserror::Error;

/// Errors that can occur while resolving analogs
///
/// An empty `AnalogMap` means "confirmed no analogs"; a failed lookup is always
/// reported through this type instead.
#[derive(Error, Debug)]
pub enum AnalogError {
    /// The relation store could not be read
    #[error("Relation store unavailable: {0}")]
    StoreUnavailable(String),
}
