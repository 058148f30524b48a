//! Typed closure: every unit reachable from a root, annotated with the
//! strongest relationship it has to that root.
//!
//! ## Classification
//!
//! The walk is depth-first and carries three pieces of state per expansion:
//!
//! - `top_level`: the unit being expanded is the root itself
//! - `is_compile_dep`: the unit was reached through a confirmed compile chain
//! - `self_visit`: the root id, while a compile edge back to it may still
//!   force the root to be expanded again as a compile dependency
//!
//! Inside a compile chain every newly reached unit is `Compile`. Outside one,
//! the edge type decides: direct `compile`/`export` edges from the root keep
//! their own kind, everything else is `Runtime`.
//!
//! Children are visited in three buckets (compile, then export, then runtime),
//! each in snapshot order. Because a unit keeps its first classification,
//! this ordering is what makes compile win over export and runtime.
//!
//! ## Self-revisit
//!
//! A root that depends on itself at compile time (directly, or through a
//! compile chain that leads back to it) turns its own runtime dependencies
//! into compile dependencies. The root is already matched by then, so the
//! walk re-expands it exactly once, as a compile dependency, when such an
//! edge is met.

use std::collections::HashMap;
use std::vec;

use tracing::{debug, trace};

use crate::graph::DependencyGraph;
use crate::types::{DependencyKind, Edge, EdgeType, UnitId};

/// One suspended expansion.
struct Frame<'g, N> {
    children: vec::IntoIter<&'g Edge<N>>,
    top_level: bool,
    is_compile_dep: bool,
    self_visit: Option<&'g N>,
}

/// Order `edges` as compile edges, then export edges, then runtime edges,
/// keeping snapshot order within each bucket.
fn by_precedence<N>(edges: &[Edge<N>]) -> Vec<&Edge<N>> {
    let mut compile = Vec::new();
    let mut export = Vec::new();
    let mut runtime = Vec::new();
    for edge in edges {
        match edge.kind {
            EdgeType::Compile => compile.push(edge),
            EdgeType::Export => export.push(edge),
            EdgeType::Runtime => runtime.push(edge),
        }
    }
    compile.extend(export);
    compile.extend(runtime);
    compile
}

/// Kind assigned to a child reached outside a compile chain, and whether the
/// child is expanded as a compile dependency.
fn classify_outside_chain(kind: EdgeType, top_level: bool) -> (DependencyKind, bool) {
    match kind {
        EdgeType::Compile if top_level => (DependencyKind::Compile, true),
        EdgeType::Export if top_level => (DependencyKind::Export, false),
        EdgeType::Compile | EdgeType::Export | EdgeType::Runtime => {
            (DependencyKind::Runtime, false)
        }
    }
}

/// Every unit reachable from `root`, with its strongest [`DependencyKind`].
///
/// The root itself is always present as [`DependencyKind::Compile`].
pub fn find_typed_closure<N: UnitId>(
    graph: &DependencyGraph<N>,
    root: &N,
) -> HashMap<N, DependencyKind> {
    let mut matched: HashMap<&N, DependencyKind> = HashMap::from([(root, DependencyKind::Compile)]);
    let mut stack = vec![Frame {
        children: by_precedence(graph.edges(root)).into_iter(),
        top_level: true,
        is_compile_dep: false,
        self_visit: Some(root),
    }];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let Some(edge) = frame.children.next() else {
            stack.pop();
            continue;
        };

        let points_at_self = frame.self_visit == Some(&edge.id);
        let needs_self_visit = points_at_self
            && (frame.is_compile_dep || (frame.top_level && edge.kind == EdgeType::Compile));

        if matched.contains_key(&edge.id) && !needs_self_visit {
            continue;
        }
        if needs_self_visit {
            trace!(unit = ?edge.id, "Re-expanding root as a compile dependency");
            frame.self_visit = None;
        }

        let (kind, is_compile_dep) = if frame.is_compile_dep {
            (DependencyKind::Compile, true)
        } else {
            classify_outside_chain(edge.kind, frame.top_level)
        };
        let self_visit = if is_compile_dep { frame.self_visit } else { None };

        matched.insert(&edge.id, kind);
        stack.push(Frame {
            children: by_precedence(graph.edges(&edge.id)).into_iter(),
            top_level: false,
            is_compile_dep,
            self_visit,
        });
    }

    debug!(root = ?root, reachable = matched.len(), "Computed typed closure");

    matched
        .into_iter()
        .map(|(id, kind)| (id.clone(), kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DependencyKind::{Compile, Export, Runtime};

    fn kinds(pairs: &[(&'static str, DependencyKind)]) -> HashMap<&'static str, DependencyKind> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn by_precedence_buckets_are_stable() {
        let edges = vec![
            Edge::runtime("r1"),
            Edge::export("e1"),
            Edge::compile("c1"),
            Edge::runtime("r2"),
            Edge::compile("c2"),
        ];

        let ordered: Vec<_> = by_precedence(&edges).into_iter().map(|e| e.id).collect();

        assert_eq!(ordered, vec!["c1", "c2", "e1", "r1", "r2"]);
    }

    #[test]
    fn direct_edges_keep_their_kind() {
        let graph = DependencyGraph::new()
            .with_edge("a", "b", EdgeType::Compile)
            .with_edge("a", "c", EdgeType::Export)
            .with_edge("a", "d", EdgeType::Runtime);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(
            closure,
            kinds(&[("a", Compile), ("b", Compile), ("c", Export), ("d", Runtime)])
        );
    }

    #[test]
    fn export_children_are_runtime() {
        let graph = DependencyGraph::new()
            .with_edge("a", "b", EdgeType::Export)
            .with_edge("b", "c", EdgeType::Compile)
            .with_edge("c", "d", EdgeType::Export);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(
            closure,
            kinds(&[("a", Compile), ("b", Export), ("c", Runtime), ("d", Runtime)])
        );
    }

    #[test]
    fn compile_wins_regardless_of_snapshot_order() {
        // The runtime edge to x is listed first, but the compile path through b
        // is explored first.
        let graph = DependencyGraph::new()
            .with_edge("a", "x", EdgeType::Runtime)
            .with_edge("a", "b", EdgeType::Compile)
            .with_edge("b", "x", EdgeType::Runtime);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(closure[&"x"], Compile);
    }

    #[test]
    fn direct_self_loop_escalates_runtime_dependencies() {
        let graph = DependencyGraph::new()
            .with_edge("a", "b", EdgeType::Runtime)
            .with_edge("a", "a", EdgeType::Compile)
            .with_edge("b", "c", EdgeType::Export);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(closure, kinds(&[("a", Compile), ("b", Compile), ("c", Compile)]));
    }

    #[test]
    fn indirect_self_reference_escalates_runtime_dependencies() {
        // a -compile-> m -runtime-> a ; a -runtime-> r
        let graph = DependencyGraph::new()
            .with_edge("a", "m", EdgeType::Compile)
            .with_edge("m", "a", EdgeType::Runtime)
            .with_edge("a", "r", EdgeType::Runtime);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(closure, kinds(&[("a", Compile), ("m", Compile), ("r", Compile)]));
    }

    #[test]
    fn runtime_self_loop_does_not_escalate() {
        let graph = DependencyGraph::new()
            .with_edge("a", "a", EdgeType::Runtime)
            .with_edge("a", "b", EdgeType::Runtime);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(closure, kinds(&[("a", Compile), ("b", Runtime)]));
    }

    #[test]
    fn non_root_compile_edges_outside_chain_are_runtime() {
        let graph = DependencyGraph::new()
            .with_edge("a", "b", EdgeType::Runtime)
            .with_edge("b", "c", EdgeType::Compile)
            .with_edge("c", "b", EdgeType::Compile);

        let closure = find_typed_closure(&graph, &"a");

        assert_eq!(closure, kinds(&[("a", Compile), ("b", Runtime), ("c", Runtime)]));
    }
}
