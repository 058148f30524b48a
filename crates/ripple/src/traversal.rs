//! Shared two-frontier breadth-first walk.
//!
//! The depth mapper and both path finders walk the graph the same way: pop
//! from the current frontier, push newly discovered units onto the next one,
//! and swap frontiers (one level deeper) when the current frontier runs dry.
//! They differ only in which edges they follow and what they record, which is
//! what a [`LayerVisitor`] decides.
//!
//! ```text
//!   depth 0        depth 1            depth 2
//!   [root]  ──►  [b, c]  ──swap──►  [d, e, f]  ──swap──►  ...
//!   current       next
//! ```

use std::collections::VecDeque;

use crate::graph::DependencyGraph;
use crate::types::{Edge, UnitId};

/// A unit taken off the current frontier.
#[derive(Debug)]
pub(crate) struct Visit<'g, N> {
    /// The unit being visited.
    pub node: &'g N,
    /// The unit whose edge discovered this one; `None` for the start unit.
    pub parent: Option<&'g N>,
    /// Hop count from the start unit.
    pub depth: usize,
}

/// Per-call policy plugged into [`walk_layers`].
pub(crate) trait LayerVisitor<'g, N> {
    /// Record a unit popped from the current frontier.
    fn visit(&mut self, visit: &Visit<'g, N>);

    /// Decide whether `edge`, leaving the unit just visited, puts its target
    /// on the next frontier.
    fn follow(&mut self, from: &Visit<'g, N>, edge: &'g Edge<N>) -> bool;
}

/// Walk `graph` level by level from `start`, delegating bookkeeping to `visitor`.
///
/// Frontiers are FIFO, so units at the same depth are visited in discovery
/// order and every pop is at a depth no smaller than the one before it.
/// Termination is the visitor's job: `follow` must eventually refuse units
/// that have already been visited.
pub(crate) fn walk_layers<'g, N, V>(graph: &'g DependencyGraph<N>, start: &'g N, visitor: &mut V)
where
    N: UnitId,
    V: LayerVisitor<'g, N>,
{
    let mut current = VecDeque::from([Visit {
        node: start,
        parent: None,
        depth: 0,
    }]);
    let mut next = VecDeque::new();

    while let Some(visit) = current.pop_front() {
        visitor.visit(&visit);

        for edge in graph.edges(visit.node) {
            if visitor.follow(&visit, edge) {
                next.push_back(Visit {
                    node: &edge.id,
                    parent: Some(visit.node),
                    depth: visit.depth + 1,
                });
            }
        }

        if current.is_empty() {
            std::mem::swap(&mut current, &mut next);
        }
    }
}
