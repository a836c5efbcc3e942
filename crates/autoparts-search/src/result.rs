//! Search result decoration

use crate::pricing::PricedPart;
use autoparts_domain::{AnalogInfo, Money, Part, PartId, RelationType};

/// One row of a search answer
///
/// Wraps a priced, unmodified `Part` with how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The part and the prices the viewer may see
    pub priced: PricedPart,

    /// Matched the query directly (by part number or text)
    pub is_exact_match: bool,

    /// Found as a substitute of a matched part
    pub is_analog: bool,

    /// Direct or indirect (analogs only)
    pub relation_type: Option<RelationType>,

    /// Relation annotation (analogs only)
    pub analog_type: Option<String>,

    /// Hop distance from the nearest matched part (analogs only)
    pub distance: Option<u32>,
}

impl SearchResult {
    /// A part that matched the query itself
    pub fn primary(priced: PricedPart) -> Self {
        Self {
            priced,
            is_exact_match: true,
            is_analog: false,
            relation_type: None,
            analog_type: None,
            distance: None,
        }
    }

    /// A part found as an analog
    pub fn analog(priced: PricedPart, info: AnalogInfo) -> Self {
        Self {
            priced,
            is_exact_match: false,
            is_analog: true,
            relation_type: Some(info.relation),
            analog_type: Some(info.analog_type),
            distance: Some(info.distance),
        }
    }

    /// Part id
    pub fn id(&self) -> PartId {
        self.priced.part.id
    }

    /// The catalog part
    pub fn part(&self) -> &Part {
        &self.priced.part
    }

    /// Price shown to the viewer
    pub fn price(&self) -> Money {
        self.priced.price
    }
}
