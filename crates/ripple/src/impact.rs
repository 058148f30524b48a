//! Compile-impact resolution.
//!
//! Edges point from a unit to what it depends on, so walking out of a root
//! collects the units whose change invalidates the root's compiled output.
//! Read the other way around, the root is affected whenever any of them
//! changes; [`affected_map`](crate::affected_map) performs that inversion for
//! a batch of roots.
//!
//! The walk is depth-first in snapshot edge order:
//!
//! | Edge      | Unmatched target is matched          | Target's edges expanded?     |
//! |-----------|--------------------------------------|------------------------------|
//! | `compile` | always                               | yes, as a compile dependency |
//! | `export`  | always                               | no                           |
//! | `runtime` | only inside a compile dependency     | yes, as a compile dependency |
//!
//! Matching is first-come: a unit reached first through an export edge is not
//! expanded later through a compile edge. The recursion is kept on an explicit
//! stack of edge cursors so deep chains cannot overflow the call stack, while
//! visiting edges in exactly the order a recursive walk would.

use std::collections::HashSet;
use std::slice;

use tracing::debug;

use crate::graph::DependencyGraph;
use crate::types::{Edge, EdgeType, UnitId};

/// One suspended expansion: the edges still to look at and whether the unit
/// being expanded was reached as a compile dependency.
struct Frame<'g, N> {
    edges: slice::Iter<'g, Edge<N>>,
    is_compile_dep: bool,
}

/// The compile-impact set of `root`: every unit whose change forces `root`
/// to recompile.
///
/// Always contains `root` itself.
pub fn find_compile_impact<N: UnitId>(graph: &DependencyGraph<N>, root: &N) -> HashSet<N> {
    let mut matched: HashSet<&N> = HashSet::from([root]);
    let mut stack = vec![Frame {
        edges: graph.edges(root).iter(),
        is_compile_dep: false,
    }];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let is_compile_dep = frame.is_compile_dep;
        let Some(edge) = frame.edges.next() else {
            stack.pop();
            continue;
        };

        let expand = match edge.kind {
            EdgeType::Compile => matched.insert(&edge.id),
            EdgeType::Export => {
                matched.insert(&edge.id);
                false
            }
            EdgeType::Runtime => is_compile_dep && matched.insert(&edge.id),
        };

        if expand {
            stack.push(Frame {
                edges: graph.edges(&edge.id).iter(),
                is_compile_dep: true,
            });
        }
    }

    debug!(root = ?root, affected = matched.len(), "Computed compile impact");

    matched.into_iter().cloned().collect()
}
