//! Analog resolution for a single part

use crate::components::{distances, find_components, Component};
use crate::graph::build_graph;
use crate::{AnalogError, ResolverConfig};
use autoparts_domain::traits::RelationStore;
use autoparts_domain::{AnalogEdge, AnalogInfo, AnalogMap, PartId, RelationType};
use std::fmt::Display;

/// Resolves the full substitution set of a part
///
/// Every call reads the relation store again; nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// use autoparts_analogs::{AnalogResolver, ResolverConfig};
/// use autoparts_domain::PartId;
/// use autoparts_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SqliteStore::new("autoparts.db")?;
/// let resolver = AnalogResolver::new(&store, ResolverConfig::default());
///
/// for (id, info) in resolver.resolve(PartId::new(10))? {
///     println!("{} {} distance={}", id, info.relation.as_str(), info.distance);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AnalogResolver<'a, S: ?Sized> {
    store: &'a S,
    config: ResolverConfig,
}

impl<'a, S> AnalogResolver<'a, S>
where
    S: RelationStore + ?Sized,
    S::Error: Display,
{
    /// Create a resolver over a relation store
    pub fn new(store: &'a S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    /// Create a resolver with default configuration
    pub fn with_defaults(store: &'a S) -> Self {
        Self::new(store, ResolverConfig::default())
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every analog of `part_id`
    ///
    /// Direct analogs (a stored edge in either direction) get distance 1 and
    /// the edge annotation. Everything else in the part's component is
    /// indirect, with its hop count in the raw graph, or the configured
    /// fallback distance when no hop count is known.
    ///
    /// A part without edges resolves to an empty map. A store failure is an
    /// error, never an empty map.
    pub fn resolve(&self, part_id: PartId) -> Result<AnalogMap, AnalogError> {
        // Raw graph: hop distances for ranking
        let graph = build_graph(self.store)?;
        let hop_distances = distances(&graph, part_id);

        // Closed graph: the candidate set
        let candidates = graph.close().reachable(part_id);

        let mut analogs = AnalogMap::new();

        // Direct edges straight from the store. This also backs up the closure:
        // a declared analog is never dropped.
        for edge in self.direct_edges(part_id)? {
            if let Some(other) = edge.other_end(part_id) {
                analogs
                    .entry(other)
                    .or_insert_with(|| AnalogInfo::direct(edge.analog_type_or_default()));
            }
        }

        for candidate in candidates {
            if candidate == part_id || analogs.contains_key(&candidate) {
                continue;
            }
            let distance = hop_distances
                .get(&candidate)
                .copied()
                .unwrap_or(self.config.fallback_distance);
            analogs.insert(candidate, AnalogInfo::indirect(distance));
        }

        tracing::debug!(part = %part_id, analogs = analogs.len(), "resolved analogs");
        Ok(analogs)
    }

    /// How two parts are related, if at all
    ///
    /// `Direct` when a stored edge links them, `Indirect` when they share a
    /// component, `None` otherwise. A part is not related to itself.
    pub fn relation_between(&self, a: PartId, b: PartId) -> Result<Option<RelationType>, AnalogError> {
        if a == b {
            return Ok(None);
        }

        let direct = self
            .direct_edges(a)?
            .iter()
            .any(|edge| edge.other_end(a) == Some(b));
        if direct {
            return Ok(Some(RelationType::Direct));
        }

        let graph = build_graph(self.store)?;
        if distances(&graph, a).contains_key(&b) {
            Ok(Some(RelationType::Indirect))
        } else {
            Ok(None)
        }
    }

    /// All analog groups (connected components), members and groups sorted by id
    pub fn groups(&self) -> Result<Vec<Component>, AnalogError> {
        let graph = build_graph(self.store)?;
        let mut groups: Vec<Component> = find_components(&graph)
            .into_iter()
            .map(Component::sorted)
            .collect();
        groups.sort_by_key(|group| group.members().first().copied());
        Ok(groups)
    }

    fn direct_edges(&self, part_id: PartId) -> Result<Vec<AnalogEdge>, AnalogError> {
        self.store.edges_for(part_id).map_err(|e| {
            tracing::warn!(part = %part_id, error = %e, "failed to read direct analog edges");
            AnalogError::StoreUnavailable(e.to_string())
        })
    }
}
