//! Path reconstruction from the next-hop matrix.

use crate::engine::{Distance, ShortestPaths};
use crate::graph::LabelIndex;

/// Result of a point query. None of these are errors.
#[derive(Clone, Debug, PartialEq)]
pub enum PathOutcome {
    /// Node indices from start to end inclusive, and `distance(start, end)` from the matrix.
    Found { path: Vec<usize>, distance: f64 },
    /// Unknown endpoint, unreachable target, or start == end with no cycle back to start.
    NoPath,
    /// The walk did not reach the target within n+1 hops: a negative cycle
    /// corrupted the routing table for this pair.
    Unreliable,
}

impl PathOutcome {
    /// Path as labels; empty unless found.
    pub fn labels(&self, index: &LabelIndex) -> Vec<String> {
        match self {
            PathOutcome::Found { path, .. } => path
                .iter()
                .filter_map(|&i| index.label(i).map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            PathOutcome::Found { distance, .. } => Some(*distance),
            _ => None,
        }
    }
}

/// Walks `next(current, end)` from `start` until `end` is reached.
///
/// Stops after n+1 hops. A cycle-free route never needs more than n-1, so
/// running out of hops (or hitting a missing hop mid-walk) can only come from
/// a negative cycle and yields [`PathOutcome::Unreliable`].
///
/// The returned distance is read from the distance matrix, not re-summed from
/// the walked edges; the two agree unless a negative cycle is involved.
pub fn reconstruct(paths: &ShortestPaths, start: usize, end: usize) -> PathOutcome {
    let n = paths.node_count();
    if start >= n || end >= n {
        return PathOutcome::NoPath;
    }
    if paths.next_hop(start, end).is_none() {
        return PathOutcome::NoPath;
    }
    let Distance::Finite(distance) = paths.distance(start, end) else {
        return PathOutcome::NoPath;
    };

    let mut path = vec![start];
    let mut current = start;
    for _ in 0..=n {
        let Some(hop) = paths.next_hop(current, end) else {
            return PathOutcome::Unreliable;
        };
        current = hop;
        path.push(current);
        if current == end {
            return PathOutcome::Found { path, distance };
        }
    }
    PathOutcome::Unreliable
}

impl ShortestPaths {
    /// Point query by label. Unknown labels give [`PathOutcome::NoPath`].
    pub fn path(&self, start: &str, end: &str) -> PathOutcome {
        let index = self.label_index();
        match (index.index_of(start), index.index_of(end)) {
            (Some(s), Some(e)) => reconstruct(self, s, e),
            _ => PathOutcome::NoPath,
        }
    }
}
