//! Configuration for analog resolution

use serde::{Deserialize, Serialize};

/// Distance reported for an indirect analog whose hop count is unknown
pub const DEFAULT_FALLBACK_DISTANCE: u32 = 2;

/// Configuration for the analog resolver
///
/// # Examples
///
/// ```
/// use autoparts_analogs::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.fallback_distance, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Distance given to closure members that the raw-graph BFS did not reach.
    ///
    /// The closure and the BFS are computed from the same edge snapshot, so
    /// every closure member has a measured hop count and this value never
    /// reaches a result today. It is kept (default 2) as the compatibility
    /// label for an unmeasured indirect analog.
    pub fallback_distance: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_distance: DEFAULT_FALLBACK_DISTANCE,
        }
    }
}
