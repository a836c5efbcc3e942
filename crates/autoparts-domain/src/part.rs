//! Part module - catalog items as seen by the search core

use crate::Money;
use std::fmt;

/// Opaque unique identifier of a catalog part
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartId(i64);

impl PartId {
    /// Create a PartId from its raw storage value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PartId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog part
///
/// Parts are owned by catalog management and are read-only to the search core.
/// Search decorations are never written onto a `Part`; they live in wrapper types.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Unique identifier
    pub id: PartId,

    /// Manufacturer part number (article)
    pub part_number: String,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Manufacturer / brand
    pub manufacturer: String,

    /// Category reference
    pub category_id: Option<i64>,

    /// Price before any markup
    pub base_price: Money,

    /// Units in stock
    pub stock_quantity: u32,

    /// Whether the part is listed for sale
    pub available: bool,
}

impl Part {
    /// Create a new available part with no description or category
    pub fn new(
        id: PartId,
        part_number: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        base_price: Money,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id,
            part_number: part_number.into(),
            name: name.into(),
            description: None,
            manufacturer: manufacturer.into(),
            category_id: None,
            base_price,
            stock_quantity,
            available: true,
        }
    }

    /// Whether the part may be shown in search results
    ///
    /// Only listed parts with at least one unit in stock are display-eligible.
    pub fn is_display_eligible(&self) -> bool {
        self.available && self.stock_quantity > 0
    }
}
