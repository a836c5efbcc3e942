//! Analog graph construction and closure

use crate::components::find_components;
use crate::AnalogError;
use autoparts_domain::traits::RelationStore;
use autoparts_domain::{AnalogEdge, PartId};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

/// Undirected adjacency of parts linked by analog edges
///
/// Built fresh for every resolution. Adjacency is always symmetric:
/// `b` is a neighbor of `a` exactly when `a` is a neighbor of `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalogGraph {
    adjacency: BTreeMap<PartId, BTreeSet<PartId>>,
}

impl AnalogGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from stored edges
    ///
    /// Reciprocal and repeated rows collapse into one undirected edge.
    /// Self-edges are skipped.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalogEdge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            if edge.is_self_edge() {
                tracing::warn!(part = %edge.part_id, "skipping self analog edge");
                continue;
            }
            graph.add_edge(edge.part_id, edge.analog_part_id);
        }
        graph
    }

    /// Link two parts in both directions
    ///
    /// Returns true if the edge was not present before.
    pub fn add_edge(&mut self, a: PartId, b: PartId) -> bool {
        if a == b {
            return false;
        }
        let inserted = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// Direct neighbors of a part, if it appears in any edge
    pub fn neighbors(&self, id: PartId) -> Option<&BTreeSet<PartId>> {
        self.adjacency.get(&id)
    }

    /// Whether the part appears in any edge
    pub fn contains(&self, id: PartId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Whether two parts are directly linked
    pub fn is_adjacent(&self, a: PartId, b: PartId) -> bool {
        self.adjacency
            .get(&a)
            .map(|neighbors| neighbors.contains(&b))
            .unwrap_or(false)
    }

    /// All parts appearing in any edge, in id order
    pub fn nodes(&self) -> impl Iterator<Item = PartId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of parts appearing in any edge
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Whether the graph has no edges
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Turn every connected component into a full clique
    ///
    /// Components of a single part are left alone; a part is never its own analog.
    pub fn close(&self) -> ClosedAnalogGraph {
        let mut closed = self.clone();
        let mut added_edges = 0;

        for component in find_components(self) {
            if component.len() < 2 {
                continue;
            }
            let members = component.members();
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    if closed.add_edge(a, b) {
                        added_edges += 1;
                    }
                }
            }
        }

        tracing::debug!(
            nodes = closed.node_count(),
            edges = closed.edge_count(),
            added_edges,
            "closed analog graph"
        );

        ClosedAnalogGraph {
            graph: closed,
            added_edges,
        }
    }
}

/// Analog graph where any two parts of a component are directly linked
///
/// This is the substitution-equivalence relation used to answer
/// "everything usable in place of X". Distances are never read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedAnalogGraph {
    graph: AnalogGraph,
    added_edges: usize,
}

impl ClosedAnalogGraph {
    /// The closed adjacency
    pub fn graph(&self) -> &AnalogGraph {
        &self.graph
    }

    /// Number of edges the closure had to add
    pub fn added_edges(&self) -> usize {
        self.added_edges
    }

    /// Every part substitutable for `id`, excluding `id` itself
    pub fn reachable(&self, id: PartId) -> BTreeSet<PartId> {
        let mut reachable = self.graph.neighbors(id).cloned().unwrap_or_default();
        reachable.remove(&id);
        reachable
    }

    /// Consume the wrapper and return the closed adjacency
    pub fn into_graph(self) -> AnalogGraph {
        self.graph
    }
}

/// Load all edges from the relation store and build the raw graph
///
/// A store failure is returned as `AnalogError::StoreUnavailable`,
/// never as an empty graph.
pub fn build_graph<S>(store: &S) -> Result<AnalogGraph, AnalogError>
where
    S: RelationStore + ?Sized,
    S::Error: Display,
{
    let edges = store.list_edges().map_err(|e| {
        tracing::warn!(error = %e, "failed to list analog edges");
        AnalogError::StoreUnavailable(e.to_string())
    })?;

    let graph = AnalogGraph::from_edges(&edges);
    tracing::debug!(
        rows = edges.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built analog graph"
    );
    Ok(graph)
}
