//! Shortest dependency paths between two units.
//!
//! Both finders run the shared layered walk and record, per visited unit, the
//! depth at which it was first reached and the unit that reached it. The path
//! is rebuilt by following parent links back from the target.
//!
//! The compile-gated finder differs in two ways:
//!
//! - the first hop out of the source must be a `compile` edge; every later hop
//!   is unrestricted
//! - the source is not recorded at depth 0, so a path that leaves the source
//!   and comes back to it (a compile self-loop, or a cycle) is still found
//!
//! As a consequence, asking the gated finder for a path from a unit to itself
//! only succeeds through such a cycle, while the unrestricted finder always
//! returns the single-unit path.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::graph::DependencyGraph;
use crate::traversal::{walk_layers, LayerVisitor, Visit};
use crate::types::{Edge, EdgeType, UnitId};

/// Shortest known distance from the source and the predecessor on that path.
#[derive(Debug, Clone, Copy)]
struct PathRecord<'g, N> {
    depth: usize,
    parent: Option<&'g N>,
}

/// First-hop policy for the path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FirstHop {
    Any,
    CompileOnly,
}

struct PathRecorder<'g, N> {
    first_hop: FirstHop,
    visited: HashMap<&'g N, PathRecord<'g, N>>,
}

impl<'g, N: UnitId> LayerVisitor<'g, N> for PathRecorder<'g, N> {
    fn visit(&mut self, visit: &Visit<'g, N>) {
        let record = PathRecord {
            depth: visit.depth,
            parent: visit.parent,
        };
        if let Some(existing) = self.visited.get_mut(visit.node) {
            if visit.depth < existing.depth {
                trace!(
                    unit = ?visit.node,
                    from = existing.depth,
                    to = visit.depth,
                    "Shortened path record"
                );
                *existing = record;
            }
            return;
        }

        // The gated source stays unrecorded so a cycle can lead back to it.
        if visit.depth == 0 && self.first_hop == FirstHop::CompileOnly {
            return;
        }
        self.visited.insert(visit.node, record);
    }

    fn follow(&mut self, from: &Visit<'g, N>, edge: &'g Edge<N>) -> bool {
        if self.visited.contains_key(&edge.id) {
            return false;
        }
        from.depth > 0 || self.first_hop == FirstHop::Any || edge.kind == EdgeType::Compile
    }
}

/// Walk parent links back from `target` while recorded depths strictly
/// decrease, then reverse.
///
/// Returns `None` if `target` was never visited. The walk stops at the first
/// parent that was not recorded (the gated finder's source) or whose depth
/// does not decrease, so malformed or cyclic parent chains cannot loop.
fn reconstruct<N: UnitId>(visited: &HashMap<&N, PathRecord<'_, N>>, target: &N) -> Option<Vec<N>> {
    let mut record = visited.get(target)?;
    let mut path = vec![target.clone()];

    while let Some(parent) = record.parent {
        path.push(parent.clone());
        match visited.get(parent) {
            Some(parent_record) if parent_record.depth < record.depth => record = parent_record,
            _ => break,
        }
    }

    path.reverse();
    Some(path)
}

fn shortest_path<N: UnitId>(
    graph: &DependencyGraph<N>,
    source: &N,
    target: &N,
    first_hop: FirstHop,
) -> Option<Vec<N>> {
    let mut recorder = PathRecorder {
        first_hop,
        visited: HashMap::new(),
    };
    walk_layers(graph, source, &mut recorder);

    let path = reconstruct(&recorder.visited, target);
    debug!(
        source = ?source,
        target = ?target,
        gated = first_hop == FirstHop::CompileOnly,
        visited = recorder.visited.len(),
        hops = path.as_ref().map(|p| p.len() - 1),
        "Searched for shortest path"
    );
    path
}

/// Shortest path (by hop count) from `source` to `target`, over any edge type.
///
/// Returns `None` if `target` is unreachable. A unit's path to itself is
/// `[source]`.
pub fn find_shortest_path<N: UnitId>(
    graph: &DependencyGraph<N>,
    source: &N,
    target: &N,
) -> Option<Vec<N>> {
    shortest_path(graph, source, target, FirstHop::Any)
}

/// Shortest path from `source` to `target` whose first hop is a compile edge.
///
/// Returns `None` if no such path exists. See the [module docs](self) for
/// how paths from a unit back to itself are handled.
pub fn find_compile_gated_shortest_path<N: UnitId>(
    graph: &DependencyGraph<N>,
    source: &N,
    target: &N,
) -> Option<Vec<N>> {
    shortest_path(graph, source, target, FirstHop::CompileOnly)
}
