//! Shared builders and proptest strategies for engine integration tests.

use pathgraph::{floyd_warshall, EdgeSpec, EngineLimits, GraphModel, LabelIndex, ShortestPaths};
use proptest::prelude::*;

/// Runs the engine over alphabetic labels.
pub fn solve(n: usize, edges: &[EdgeSpec]) -> ShortestPaths {
    let graph = GraphModel::build(n, None, edges, &EngineLimits::default()).expect("valid graph");
    floyd_warshall(&graph)
}

/// Index triples `(u, v, w)` as edge specs over alphabetic labels.
pub fn to_specs(n: usize, edges: &[(usize, usize, i64)]) -> Vec<EdgeSpec> {
    let index = LabelIndex::alphabetic(n);
    let labels = index.labels();
    edges
        .iter()
        .map(|&(u, v, w)| EdgeSpec::new(labels[u].clone(), labels[v].clone(), w as f64))
        .collect()
}

/// A node count in `2..=max_nodes` and up to `3n` edges with integer weights in `weights`.
///
/// Integer weights keep every sum exact in f64, so equality checks are safe.
pub fn arb_graph(
    max_nodes: usize,
    weights: std::ops::RangeInclusive<i64>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (2..=max_nodes).prop_flat_map(move |n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, weights.clone()), 0..=n * 3),
        )
    })
}
