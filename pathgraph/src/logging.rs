//! Logging utilities for engine runs and request handling.
//!
//! With the `tracing` feature these emit structured `tracing` events; without
//! it only warnings are written to stderr.

use std::time::Duration;

use crate::error::GraphError;

/// Log the start of one Floyd–Warshall run.
pub fn log_compute_start(node_count: usize, edge_count: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node_count, edge_count, "Starting shortest path computation");

    #[cfg(not(feature = "tracing"))]
    let _ = (node_count, edge_count);
}

/// Log completion of one run with its flags and elapsed time.
pub fn log_compute_complete(
    node_count: usize,
    negative_edge: bool,
    negative_cycle: bool,
    elapsed: Duration,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        node_count,
        negative_edge,
        negative_cycle,
        elapsed_us = elapsed.as_micros() as u64,
        "Shortest path computation complete"
    );

    #[cfg(not(feature = "tracing"))]
    let _ = (node_count, negative_edge, negative_cycle, elapsed);
}

/// Log that relaxation left a negative diagonal.
pub fn log_negative_cycle(node_count: usize) {
    #[cfg(feature = "tracing")]
    tracing::warn!(node_count, "Negative cycle detected; matrices are best effort");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] Negative cycle detected in {}-node graph; matrices are best effort",
        node_count
    );
}

/// Log a payload rejected before computation.
pub fn log_request_rejected(operation: &str, error: &GraphError) {
    #[cfg(feature = "tracing")]
    tracing::info!(operation, kind = error.kind(), %error, "Request rejected");

    #[cfg(not(feature = "tracing"))]
    let _ = (operation, error);
}
