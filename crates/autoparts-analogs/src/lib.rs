//! Autoparts Analog Engine
//!
//! Resolves which parts can substitute for which, from a sparse table of
//! pairwise analog relations.
//!
//! # Overview
//!
//! - **Graph building**: all stored relations become an undirected adjacency,
//!   with reciprocal and repeated rows collapsed
//! - **Closure**: every connected component becomes a clique, so "is an analog
//!   of" behaves as an equivalence relation
//! - **Distances**: breadth-first hop counts over the raw (un-closed) graph,
//!   used only for ranking
//! - **Resolution**: direct analogs at distance 1, everything else in the
//!   component as indirect
//!
//! The graph is rebuilt from the relation store on every call and never cached.
//!
//! # Usage
//!
//! ```no_run
//! use autoparts_analogs::AnalogResolver;
//! use autoparts_domain::PartId;
//! use autoparts_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new("autoparts.db")?;
//! let resolver = AnalogResolver::with_defaults(&store);
//!
//! let analogs = resolver.resolve(PartId::new(1))?;
//! println!("{} analogs", analogs.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod components;
mod config;
mod error;
mod graph;
mod resolver;

pub use components::{distances, find_components, Component};
pub use config::{ResolverConfig, DEFAULT_FALLBACK_DISTANCE};
pub use error::AnalogError;
pub use graph::{build_graph, AnalogGraph, ClosedAnalogGraph};
pub use resolver::AnalogResolver;
