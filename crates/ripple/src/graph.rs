//! The dependency graph snapshot every resolver runs over.
//!
//! A [`DependencyGraph`] maps a unit to its ordered outgoing edges. Units with
//! no outgoing edges may be absent, and edges may point at ids that have no
//! entry of their own; both are treated as leaves. Cycles and self-loops are
//! allowed.
//!
//! ## Snapshot format
//!
//! ```json
//! {
//!   "lib/app.ex":  [{ "id": "lib/repo.ex", "type": "compile" }],
//!   "lib/repo.ex": [{ "id": "lib/schema.ex", "type": "runtime" }]
//! }
//! ```
//!
//! Edge types are validated while loading. An unrecognized type aborts the
//! load with [`Error::UnknownEdgeType`], so a graph that exists is always
//! well-typed.
//!
//! [`Error::UnknownEdgeType`]: crate::Error::UnknownEdgeType

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{Edge, EdgeType, UnitId};

/// Edge as it appears in a snapshot, before its type has been validated.
#[derive(Debug, Deserialize)]
struct RawEdge<N> {
    id: N,
    #[serde(rename = "type")]
    kind: String,
}

/// Immutable adjacency list of typed dependency edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph<N: UnitId> {
    edges: HashMap<N, Vec<Edge<N>>>,
}

impl<N: UnitId> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<N: UnitId> DependencyGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge from `from` to `to`, preserving insertion order.
    pub fn add_edge(&mut self, from: N, to: N, kind: EdgeType) {
        self.edges.entry(from).or_default().push(Edge::new(to, kind));
    }

    /// Builder form of [`add_edge`](Self::add_edge).
    #[must_use]
    pub fn with_edge(mut self, from: N, to: N, kind: EdgeType) -> Self {
        self.add_edge(from, to, kind);
        self
    }

    /// Outgoing edges of `id`, in snapshot order.
    ///
    /// Ids without an entry are leaves and yield an empty slice.
    pub fn edges(&self, id: &N) -> &[Edge<N>] {
        self.edges.get(id).map_or(&[], Vec::as_slice)
    }

    /// Every unit mentioned by the graph, either as a source or as an edge target.
    pub fn units(&self) -> HashSet<&N> {
        let mut units: HashSet<&N> = self.edges.keys().collect();
        units.extend(self.edges.values().flatten().map(|edge| &edge.id));
        units
    }

    /// Returns `true` if `id` appears anywhere in the graph.
    pub fn contains(&self, id: &N) -> bool {
        self.edges.contains_key(id)
            || self
                .edges
                .values()
                .flatten()
                .any(|edge| edge.id == *id)
    }

    /// Number of units with at least one outgoing edge entry.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<N: UnitId + DeserializeOwned> DependencyGraph<N> {
    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) for malformed JSON and
    /// [`Error::UnknownEdgeType`](crate::Error::UnknownEdgeType) for the first
    /// edge whose type is not `compile`, `export` or `runtime`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<N, Vec<RawEdge<N>>> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a snapshot from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`from_json_str`](Self::from_json_str).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<N, Vec<RawEdge<N>>> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, otherwise the same
    /// errors as [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let graph = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(
            path = %path.display(),
            sources = graph.source_count(),
            edges = graph.edge_count(),
            "Loaded dependency graph"
        );
        Ok(graph)
    }

    fn from_raw(raw: HashMap<N, Vec<RawEdge<N>>>) -> Result<Self> {
        let edges = raw
            .into_iter()
            .map(|(id, raw_edges)| -> Result<(N, Vec<Edge<N>>)> {
                let edges = raw_edges
                    .into_iter()
                    .map(|raw| -> Result<Edge<N>> { Ok(Edge::new(raw.id, raw.kind.parse()?)) })
                    .collect::<Result<Vec<_>>>()?;
                Ok((id, edges))
            })
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { edges })
    }
}

impl<N: UnitId> FromIterator<(N, Vec<Edge<N>>)> for DependencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Edge<N>>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (id, edges) in iter {
            graph.edges.entry(id).or_default().extend(edges);
        }
        graph
    }
}
