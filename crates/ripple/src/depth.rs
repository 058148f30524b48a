//! Depth mapping: breadth-first hop counts from a root, ignoring edge type.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::DependencyGraph;
use crate::traversal::{walk_layers, LayerVisitor, Visit};
use crate::types::{Edge, UnitId};

/// Marks units on discovery so each one is enqueued exactly once.
struct DepthRecorder<'g, N> {
    depths: HashMap<&'g N, usize>,
}

impl<'g, N: UnitId> LayerVisitor<'g, N> for DepthRecorder<'g, N> {
    fn visit(&mut self, visit: &Visit<'g, N>) {
        // Only the root reaches here undiscovered.
        self.depths.entry(visit.node).or_insert(visit.depth);
    }

    fn follow(&mut self, from: &Visit<'g, N>, edge: &'g Edge<N>) -> bool {
        if self.depths.contains_key(&edge.id) {
            return false;
        }
        self.depths.insert(&edge.id, from.depth + 1);
        true
    }
}

/// Minimum hop count from `root` to every unit reachable from it.
///
/// The root is at depth 0. Edge types are ignored.
pub fn find_depth_map<N: UnitId>(graph: &DependencyGraph<N>, root: &N) -> HashMap<N, usize> {
    let mut recorder = DepthRecorder {
        depths: HashMap::new(),
    };
    walk_layers(graph, root, &mut recorder);

    debug!(root = ?root, reachable = recorder.depths.len(), "Computed depth map");

    recorder
        .depths
        .into_iter()
        .map(|(id, depth)| (id.clone(), depth))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EdgeType;

    #[test]
    fn records_minimum_depth_on_diamond() {
        // a -> b -> d, a -> c -> d, a -> d
        let graph = DependencyGraph::new()
            .with_edge("a", "b", EdgeType::Compile)
            .with_edge("a", "c", EdgeType::Export)
            .with_edge("b", "d", EdgeType::Runtime)
            .with_edge("c", "d", EdgeType::Runtime)
            .with_edge("a", "d", EdgeType::Runtime);

        let depths = find_depth_map(&graph, &"a");

        assert_eq!(depths.len(), 4);
        assert_eq!(depths[&"a"], 0);
        assert_eq!(depths[&"b"], 1);
        assert_eq!(depths[&"c"], 1);
        assert_eq!(depths[&"d"], 1);
    }

    #[test]
    fn late_sibling_does_not_push_frontier_node_deeper() {
        // c is discovered at depth 1 from a, and again from b (also depth 1)
        // before c itself has been popped.
        let graph = DependencyGraph::new()
            .with_edge("a", "b", EdgeType::Compile)
            .with_edge("a", "c", EdgeType::Compile)
            .with_edge("b", "c", EdgeType::Compile)
            .with_edge("c", "d", EdgeType::Compile);

        let depths = find_depth_map(&graph, &"a");

        assert_eq!(depths[&"c"], 1);
        assert_eq!(depths[&"d"], 2);
    }

    #[test]
    fn cycles_and_self_loops_terminate() {
        let graph = DependencyGraph::new()
            .with_edge("a", "a", EdgeType::Compile)
            .with_edge("a", "b", EdgeType::Runtime)
            .with_edge("b", "a", EdgeType::Export);

        let depths = find_depth_map(&graph, &"a");

        assert_eq!(depths.len(), 2);
        assert_eq!(depths[&"a"], 0);
        assert_eq!(depths[&"b"], 1);
    }

    #[test]
    fn unknown_root_maps_only_itself() {
        let graph: DependencyGraph<&str> = DependencyGraph::new();

        let depths = find_depth_map(&graph, &"ghost");

        assert_eq!(depths, HashMap::from([("ghost", 0)]));
    }
}
