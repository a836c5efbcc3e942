//! Autoparts Search
//!
//! Ranked part search for the storefront.
//!
//! # Overview
//!
//! - **Classification**: part-number codes (`AB-123`) versus free text
//! - **Matching**: exact, prefix and hidden "contains" fallback for codes;
//!   case-insensitive substring matching on names, descriptions and
//!   manufacturers for text
//! - **Analog expansion**: every match is expanded with its analogs, merged,
//!   de-duplicated and ranked by distance
//! - **Pricing**: markup applied per viewer; administrators also see the base
//!   price
//! - **Suggestions**: autocomplete over names, manufacturers, description
//!   words and part numbers
//!
//! # Usage
//!
//! ```no_run
//! use autoparts_search::{SearchConfig, SearchService, Viewer};
//! use autoparts_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new("autoparts.db")?;
//! let service = SearchService::new(&store, &store, SearchConfig::default());
//!
//! let results = service.search("oil filter", &Viewer::customer(10.0))?;
//! println!("{} results", results.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod merger;
mod pricing;
mod query;
mod result;
pub mod suggestions;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use merger::SearchService;
pub use pricing::{PriceFormatter, PricedPart, Viewer};
pub use query::{classify, clean_part_number, tokenize, QueryKind};
pub use result::SearchResult;
