//! Core types for dependency analysis.
//!
//! These types are shared by every resolver:
//! - [`EdgeType`] tags a single outgoing edge
//! - [`DependencyKind`] is the derived relationship of a unit to a traversal root
//! - [`UnitId`] is the bound every unit identifier satisfies

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of a build unit (file or module).
///
/// Any comparable, hashable, cloneable value works. The CLI uses `String`;
/// embedding callers often use interned integers.
pub trait UnitId: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> UnitId for T {}

/// Relationship carried by an edge from one unit to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// A change to the target's compiled form forces the source to recompile,
    /// transitively through the source's own compile edges.
    Compile,
    /// The source re-exposes the target's interface. Affects the source's
    /// public surface for this single hop only.
    Export,
    /// The source only needs the target at run time.
    Runtime,
}

impl EdgeType {
    /// Canonical lowercase name, as used in graph snapshots.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Export => "export",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compile" => Ok(Self::Compile),
            "export" => Ok(Self::Export),
            "runtime" => Ok(Self::Runtime),
            other => Err(Error::UnknownEdgeType(other.to_string())),
        }
    }
}

/// An outgoing edge: the unit depended on and how.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<N> {
    /// The unit this edge points at.
    pub id: N,
    /// The relationship type.
    #[serde(rename = "type")]
    pub kind: EdgeType,
}

impl<N> Edge<N> {
    /// Create a new edge.
    pub fn new(id: N, kind: EdgeType) -> Self {
        Self { id, kind }
    }

    /// Shorthand for a compile edge.
    pub fn compile(id: N) -> Self {
        Self::new(id, EdgeType::Compile)
    }

    /// Shorthand for an export edge.
    pub fn export(id: N) -> Self {
        Self::new(id, EdgeType::Export)
    }

    /// Shorthand for a runtime edge.
    pub fn runtime(id: N) -> Self {
        Self::new(id, EdgeType::Runtime)
    }
}

/// Strongest relationship a reachable unit has to a traversal root.
///
/// Once a unit is classified `Compile` it is never downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Changing the unit recompiles the root.
    Compile,
    /// The root re-exports the unit's interface directly.
    Export,
    /// Only a run-time relationship exists.
    Runtime,
}

impl DependencyKind {
    /// Lowercase label used in CLI output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Export => "export",
            Self::Runtime => "runtime",
        }
    }

    /// All kinds, strongest first.
    pub const ALL: [DependencyKind; 3] = [Self::Compile, Self::Export, Self::Runtime];
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
