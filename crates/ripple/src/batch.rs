//! Batch inversion of compile impact across many roots.
//!
//! [`find_compile_impact`] answers "which units can force this root to
//! recompile". A host that receives a graph snapshot and a batch of roots
//! usually wants the answer keyed the other way around: for each unit, which
//! of the roots it forces to recompile when it changes.
//!
//! Each root's impact is an independent, read-only computation, so roots are
//! resolved in parallel with rayon. The inversion itself is sequential and
//! walks roots in the order given, which keeps every affected unit's root
//! list deterministic.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::graph::DependencyGraph;
use crate::impact::find_compile_impact;
use crate::types::UnitId;

/// Unit → roots it forces to recompile when it changes, in root order.
pub type AffectedMap<N> = HashMap<N, Vec<N>>;

/// Resolve the compile impact of every root and invert the result.
///
/// Every root appears in its own list, since impact always contains the root.
/// Duplicate roots are resolved once per occurrence and listed once per
/// occurrence.
pub fn affected_map<N>(graph: &DependencyGraph<N>, roots: &[N]) -> AffectedMap<N>
where
    N: UnitId + Send + Sync,
{
    let impacts: Vec<_> = roots
        .par_iter()
        .map(|root| find_compile_impact(graph, root))
        .collect();

    let mut affected: AffectedMap<N> = HashMap::new();
    for (root, impact) in roots.iter().zip(impacts) {
        for unit in impact {
            affected.entry(unit).or_default().push(root.clone());
        }
    }

    debug!(
        roots = roots.len(),
        affected = affected.len(),
        "Inverted compile impact"
    );

    affected
}
