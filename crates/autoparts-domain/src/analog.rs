//! Analog module - substitution relations between parts

use crate::PartId;
use std::collections::BTreeMap;

/// Annotation used when an edge carries none
pub const DEFAULT_ANALOG_TYPE: &str = "alternative";

/// Annotation given to analogs found only through the closure
pub const TRANSITIVE_ANALOG_TYPE: &str = "transitive";

/// A stored substitution relation between two parts
///
/// Stored as `part_id -> analog_part_id` but symmetric in meaning: an edge
/// `(A, B)` makes A usable in place of B and B usable in place of A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogEdge {
    /// Part the relation was entered for
    pub part_id: PartId,

    /// Part declared as its analog
    pub analog_part_id: PartId,

    /// Free-text annotation ("alternative", "oem", ...)
    pub analog_type: Option<String>,
}

impl AnalogEdge {
    /// Create an edge without annotation
    pub fn new(part_id: PartId, analog_part_id: PartId) -> Self {
        Self {
            part_id,
            analog_part_id,
            analog_type: None,
        }
    }

    /// Create an annotated edge
    pub fn with_type(part_id: PartId, analog_part_id: PartId, analog_type: impl Into<String>) -> Self {
        Self {
            part_id,
            analog_part_id,
            analog_type: Some(analog_type.into()),
        }
    }

    /// Whether both ends are the same part
    pub fn is_self_edge(&self) -> bool {
        self.part_id == self.analog_part_id
    }

    /// Whether the edge touches the given part
    pub fn touches(&self, id: PartId) -> bool {
        self.part_id == id || self.analog_part_id == id
    }

    /// The end opposite to `id`, if the edge touches `id` and is not a self-edge
    pub fn other_end(&self, id: PartId) -> Option<PartId> {
        if self.is_self_edge() {
            None
        } else if self.part_id == id {
            Some(self.analog_part_id)
        } else if self.analog_part_id == id {
            Some(self.part_id)
        } else {
            None
        }
    }

    /// The annotation, or the default one
    pub fn analog_type_or_default(&self) -> &str {
        self.analog_type.as_deref().unwrap_or(DEFAULT_ANALOG_TYPE)
    }
}

/// How an analog relates to the part it was resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// Linked by a stored edge
    Direct,

    /// Reachable only through intermediate parts
    Indirect,
}

impl RelationType {
    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Direct => "direct",
            RelationType::Indirect => "indirect",
        }
    }
}

/// Resolution details for one analog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogInfo {
    /// Direct or indirect
    pub relation: RelationType,

    /// Edge annotation for direct analogs, "transitive" for indirect ones
    pub analog_type: String,

    /// Hop count in the raw relation graph (always 1 for direct analogs)
    pub distance: u32,
}

impl AnalogInfo {
    /// Details of a direct analog
    pub fn direct(analog_type: impl Into<String>) -> Self {
        Self {
            relation: RelationType::Direct,
            analog_type: analog_type.into(),
            distance: 1,
        }
    }

    /// Details of an indirect analog at the given distance
    pub fn indirect(distance: u32) -> Self {
        Self {
            relation: RelationType::Indirect,
            analog_type: TRANSITIVE_ANALOG_TYPE.to_string(),
            distance,
        }
    }
}

/// Analogs of one part keyed by analog id
pub type AnalogMap = BTreeMap<PartId, AnalogInfo>;
