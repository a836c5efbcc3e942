//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the search core and persistence.
//! Implementations live in other crates (autoparts-store).

use crate::{AnalogEdge, Part, PartId};

/// Read access to the analog relation table
///
/// Implemented by the infrastructure layer (autoparts-store)
pub trait RelationStore {
    /// Error type for store operations
    type Error;

    /// List every stored edge (no pagination)
    fn list_edges(&self) -> Result<Vec<AnalogEdge>, Self::Error>;

    /// List the stored edges touching a part, in either direction
    fn edges_for(&self, id: PartId) -> Result<Vec<AnalogEdge>, Self::Error>;
}

/// How a part number pattern is compared (always case-insensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Whole part number equals the pattern
    Exact,

    /// Part number starts with the pattern
    Prefix,

    /// Part number contains the pattern
    Contains,
}

/// Which parts a catalog lookup may return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Only listed parts with stock (display-eligible)
    InStock,

    /// Any part, including unlisted or out-of-stock ones
    Any,
}

/// Read access to catalog parts
///
/// Implemented by the infrastructure layer (autoparts-store).
/// Results come back in a stable catalog order.
pub trait Catalog {
    /// Error type for catalog operations
    type Error;

    /// Load the parts with the given ids; unknown ids are skipped
    fn find_by_ids(&self, ids: &[PartId], availability: Availability) -> Result<Vec<Part>, Self::Error>;

    /// Match part numbers against a pattern
    fn match_part_number(
        &self,
        pattern: &str,
        mode: MatchMode,
        availability: Availability,
        limit: Option<usize>,
    ) -> Result<Vec<Part>, Self::Error>;

    /// Match parts whose name, description or manufacturer contains any token
    /// or the full query (case-insensitive substring)
    fn match_text(
        &self,
        tokens: &[String],
        full_query: &str,
        availability: Availability,
        limit: Option<usize>,
    ) -> Result<Vec<Part>, Self::Error>;
}
