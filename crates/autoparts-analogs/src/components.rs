//! Connected components and hop distances over the raw analog graph

use crate::AnalogGraph;
use autoparts_domain::PartId;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// A maximal set of parts mutually reachable through analog edges
///
/// Member order follows the traversal and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    members: Vec<PartId>,
}

impl Component {
    /// Members in traversal order
    pub fn members(&self) -> &[PartId] {
        &self.members
    }

    /// Members as an ordered set
    pub fn member_set(&self) -> BTreeSet<PartId> {
        self.members.iter().copied().collect()
    }

    /// Whether the component contains a part
    pub fn contains(&self, id: PartId) -> bool {
        self.members.contains(&id)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the component has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sort members by id (for display)
    pub fn sorted(mut self) -> Self {
        self.members.sort();
        self
    }
}

/// Partition every part of the graph into connected components
///
/// Iterative depth-first search started from each unvisited part.
/// Parts with no edges are not in the graph and belong to no component.
pub fn find_components(graph: &AnalogGraph) -> Vec<Component> {
    let mut visited: HashSet<PartId> = HashSet::with_capacity(graph.node_count());
    let mut components = Vec::new();

    for start in graph.nodes() {
        if !visited.insert(start) {
            continue;
        }

        let mut members = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            members.push(node);
            if let Some(neighbors) = graph.neighbors(node) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        components.push(Component { members });
    }

    components
}

/// Shortest hop count from `start` to every part reachable from it
///
/// Breadth-first search, so the first distance recorded for a part is the
/// shortest one. `start` itself is not in the result; a part with no edges
/// yields an empty map.
pub fn distances(graph: &AnalogGraph, start: PartId) -> HashMap<PartId, u32> {
    let mut distances: HashMap<PartId, u32> = HashMap::new();
    if !graph.contains(start) {
        return distances;
    }

    let mut seen: HashSet<PartId> = HashSet::from([start]);
    let mut queue: VecDeque<(PartId, u32)> = VecDeque::from([(start, 0)]);

    while let Some((current, distance)) = queue.pop_front() {
        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };
        for &neighbor in neighbors {
            if seen.insert(neighbor) {
                distances.insert(neighbor, distance + 1);
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoparts_domain::AnalogEdge;

    fn id(value: i64) -> PartId {
        PartId::new(value)
    }

    fn graph(edges: &[(i64, i64)]) -> AnalogGraph {
        let edges: Vec<AnalogEdge> = edges
            .iter()
            .map(|&(a, b)| AnalogEdge::new(id(a), id(b)))
            .collect();
        AnalogGraph::from_edges(&edges)
    }

    fn set(values: &[i64]) -> BTreeSet<PartId> {
        values.iter().map(|&v| id(v)).collect()
    }

    #[test]
    fn test_components_partition_nodes() {
        let graph = graph(&[(1, 2), (2, 3), (10, 11), (20, 21), (21, 22), (22, 20)]);
        let components = find_components(&graph);

        let mut sets: Vec<BTreeSet<PartId>> = components.iter().map(Component::member_set).collect();
        sets.sort();
        assert_eq!(sets, vec![set(&[1, 2, 3]), set(&[10, 11]), set(&[20, 21, 22])]);

        let total: usize = components.iter().map(Component::len).sum();
        assert_eq!(total, graph.node_count());
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        assert!(find_components(&AnalogGraph::new()).is_empty());
    }

    #[test]
    fn test_distances_chain() {
        let graph = graph(&[(1, 2), (2, 3), (3, 4)]);
        let d = distances(&graph, id(1));
        assert_eq!(d.get(&id(2)), Some(&1));
        assert_eq!(d.get(&id(3)), Some(&2));
        assert_eq!(d.get(&id(4)), Some(&3));
        assert!(!d.contains_key(&id(1)), "start is excluded");
    }

    #[test]
    fn test_distances_take_shortest_path() {
        // 1-2-3-4 plus a shortcut 1-4
        let graph = graph(&[(1, 2), (2, 3), (3, 4), (1, 4)]);
        let d = distances(&graph, id(1));
        assert_eq!(d.get(&id(4)), Some(&1));
        assert_eq!(d.get(&id(3)), Some(&2));
    }

    #[test]
    fn test_distances_stop_at_component_border() {
        let graph = graph(&[(1, 2), (5, 6)]);
        let d = distances(&graph, id(1));
        assert_eq!(d.len(), 1);
        assert!(!d.contains_key(&id(5)));
    }

    #[test]
    fn test_distances_from_unknown_part() {
        let graph = graph(&[(1, 2)]);
        assert!(distances(&graph, id(999)).is_empty());
    }

    #[test]
    fn test_component_sorted() {
        let graph = graph(&[(3, 1), (1, 2)]);
        let component = find_components(&graph).remove(0).sorted();
        assert_eq!(component.members(), &[id(1), id(2), id(3)]);
        assert!(component.contains(id(2)));
    }
}
