//! Autoparts Domain Layer
//!
//! This crate contains the core domain model of the auto-parts storefront.
//! It has ZERO external dependencies and defines the value objects and the
//! trait interfaces that the store, analog and search layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Part**: A catalog item with a part number, price and stock level
//! - **Money**: Fixed-point amount in cents
//! - **AnalogEdge**: A stored "can substitute for" relation between two parts
//! - **AnalogMap**: Resolved analogs of one part with relation type and distance
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain types only
//! - Persistence lives behind the `RelationStore` and `Catalog` traits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analog;
pub mod money;
pub mod part;
pub mod traits;

// Re-exports for convenience
pub use analog::{
    AnalogEdge, AnalogInfo, AnalogMap, RelationType, DEFAULT_ANALOG_TYPE, TRANSITIVE_ANALOG_TYPE,
};
pub use money::Money;
pub use part::{Part, PartId};
pub use traits::{Availability, Catalog, MatchMode, RelationStore};
