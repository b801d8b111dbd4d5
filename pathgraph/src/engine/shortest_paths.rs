//! Result of one engine run.

use crate::graph::LabelIndex;

use super::{Distance, Matrix};

/// Distance and next-hop matrices plus the two warning flags.
///
/// Built by [`floyd_warshall`](super::floyd_warshall); immutable afterwards.
///
/// When [`has_negative_cycle`](Self::has_negative_cycle) is true the matrices
/// are best effort: any pair whose route can pass through a negative cycle has
/// a distance that is not a shortest-path value and a next hop that may loop.
/// They are returned anyway so callers can display and warn about the cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub(super) index: LabelIndex,
    pub(super) dist: Matrix<Distance>,
    pub(super) next: Matrix<Option<usize>>,
    pub(super) has_negative_edge: bool,
    pub(super) has_negative_cycle: bool,
}

impl ShortestPaths {
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn label_index(&self) -> &LabelIndex {
        &self.index
    }

    pub fn labels(&self) -> &[String] {
        self.index.labels()
    }

    /// Shortest known distance from `i` to `j`.
    pub fn distance(&self, i: usize, j: usize) -> Distance {
        self.dist[(i, j)]
    }

    /// Index of the first node after `i` on the route to `j`.
    pub fn next_hop(&self, i: usize, j: usize) -> Option<usize> {
        self.next[(i, j)]
    }

    pub fn distances(&self) -> &Matrix<Distance> {
        &self.dist
    }

    pub fn next_hops(&self) -> &Matrix<Option<usize>> {
        &self.next
    }

    /// True if any submitted edge was negative. Informational only.
    pub fn has_negative_edge(&self) -> bool {
        self.has_negative_edge
    }

    /// True iff some `distance(i, i) < 0` after relaxation.
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Nodes whose diagonal went negative, i.e. nodes lying on a negative cycle.
    pub fn negative_cycle_nodes(&self) -> Vec<usize> {
        (0..self.node_count())
            .filter(|&i| matches!(self.dist[(i, i)], Distance::Finite(d) if d < 0.0))
            .collect()
    }

    /// Next-hop matrix with indices replaced by labels.
    pub fn next_hop_labels(&self) -> Matrix<Option<&str>> {
        self.next.map(|hop| hop.and_then(|k| self.index.label(k)))
    }
}
