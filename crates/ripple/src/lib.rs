//! # Ripple: Compile-Impact and Dependency Path Analysis
//!
//! Ripple answers two questions about a typed dependency graph of build
//! units (files or modules):
//!
//! - Which units are compile-time affected when a unit changes?
//! - What is the shortest dependency path between two units, over any edge
//!   or starting with a compile edge?
//!
//! Edges carry one of three types. A `compile` edge forces recompilation
//! transitively, an `export` edge re-exposes an interface for a single hop,
//! and a `runtime` edge only matters once a walk is already inside a compile
//! chain.
//!
//! ## Design
//!
//! - **Pure functions over a snapshot** - every resolver reads an immutable
//!   [`DependencyGraph`] and keeps no state between calls
//! - **Validated at the boundary** - unknown edge types are rejected when a
//!   snapshot is loaded, so resolvers cannot fail
//! - **Library first, CLI second** - the `ripple` binary is a thin layer over
//!   the functions below
//!
//! ## Operations
//!
//! | Operation | Algorithm |
//! |-----------|-----------|
//! | [`find_compile_impact`] | Depth-first, edge-type gated |
//! | [`find_typed_closure`] | Depth-first, compile/export/runtime buckets, root self-revisit |
//! | [`find_depth_map`] | Two-frontier BFS |
//! | [`find_shortest_path`] | Two-frontier BFS with parent records |
//! | [`find_compile_gated_shortest_path`] | Same, first hop restricted to compile edges |
//! | [`affected_map`] | Parallel [`find_compile_impact`] per root, inverted |
//!
//! ## Quick Start
//!
//! ```
//! use ripple::{DependencyGraph, DependencyKind, find_compile_impact, find_shortest_path, find_typed_closure};
//!
//! let graph = DependencyGraph::<String>::from_json_str(r#"{
//!     "a": [{ "id": "b", "type": "compile" }],
//!     "b": [{ "id": "c", "type": "runtime" }]
//! }"#)?;
//! let a = "a".to_string();
//! let c = "c".to_string();
//!
//! assert_eq!(find_compile_impact(&graph, &a).len(), 3);
//! assert_eq!(find_typed_closure(&graph, &a)[&c], DependencyKind::Compile);
//! assert_eq!(find_shortest_path(&graph, &a, &c).map(|p| p.len()), Some(3));
//! # Ok::<(), ripple::Error>(())
//! ```

mod batch;
mod closure;
pub mod config;
mod depth;
mod error;
mod graph;
mod impact;
mod path;
mod traversal;
mod types;

pub use batch::{affected_map, AffectedMap};
pub use closure::find_typed_closure;
pub use config::Config;
pub use depth::find_depth_map;
pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use impact::find_compile_impact;
pub use path::{find_compile_gated_shortest_path, find_shortest_path};
pub use types::{DependencyKind, Edge, EdgeType, UnitId};
