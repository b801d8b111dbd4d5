//! Floyd–Warshall relaxation with next-hop tracking.

use std::time::Instant;

use crate::graph::GraphModel;
use crate::logging;

use super::{Distance, Matrix, ShortestPaths};

/// Computes all-pairs shortest distances and next hops for `graph`.
///
/// - `next(i, j)` starts as `j` for every edge i→j (i ≠ j), and as `i` on the
///   diagonal only for a negative self-loop.
/// - For each intermediate `k`, a shorter `dist(i,k) + dist(k,j)` replaces
///   `dist(i,j)` and sets `next(i,j) = next(i,k)`: the hop toward `k`, which
///   is what keeps reconstructed paths consistent with the distances.
/// - Sums that overflow `f64` are discarded rather than stored as infinity.
///
/// After relaxation a negative diagonal entry marks a negative cycle. The
/// matrices are returned regardless; see [`ShortestPaths`].
///
/// O(n³) time, O(n²) space, no early exit. Deterministic for a given model.
pub fn floyd_warshall(graph: &GraphModel) -> ShortestPaths {
    let started = Instant::now();
    let n = graph.node_count();
    logging::log_compute_start(n, graph.edges().len());

    let mut dist = graph.adjacency().clone();
    let mut next: Matrix<Option<usize>> = Matrix::filled(n, None);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                if matches!(dist[(i, i)], Distance::Finite(d) if d < 0.0) {
                    next[(i, i)] = Some(i);
                }
            } else if dist[(i, j)].is_reachable() {
                next[(i, j)] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[(i, k)];
            if !d_ik.is_reachable() {
                continue;
            }
            for j in 0..n {
                // Re-read: the j == k step lowers dist(i,k) when dist(k,k) < 0.
                let Some(candidate) = dist[(i, k)].checked_add(dist[(k, j)]) else {
                    continue;
                };
                if dist[(i, j)].is_improved_by(candidate) {
                    dist[(i, j)] = Distance::Finite(candidate);
                    next[(i, j)] = next[(i, k)];
                }
            }
        }
    }

    let has_negative_cycle =
        (0..n).any(|i| matches!(dist[(i, i)], Distance::Finite(d) if d < 0.0));
    let has_negative_edge = graph.has_negative_edge();

    if has_negative_cycle {
        logging::log_negative_cycle(n);
    }
    logging::log_compute_complete(n, has_negative_edge, has_negative_cycle, started.elapsed());

    ShortestPaths {
        index: graph.label_index().clone(),
        dist,
        next,
        has_negative_edge,
        has_negative_cycle,
    }
}
