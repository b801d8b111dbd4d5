//! Path reconstruction against the matrices.

use pathgraph::{floyd_warshall, reconstruct, Distance, EngineLimits, GraphModel, PathOutcome};
use proptest::prelude::*;

use crate::common::{arb_graph, solve, to_specs};

proptest! {
    /// **Scenario**: For cycle-free graphs, the walked edges sum to the matrix distance.
    ///
    /// Given: graphs with positive integer weights  
    /// When: reconstructing every pair  
    /// Then: a found path starts and ends at the endpoints, has at most n nodes, and the
    /// sum of edge weights along it equals dist(start, end)
    #[test]
    fn reconstructed_paths_sum_to_matrix_distance((n, edges) in arb_graph(8, 1..=15)) {
        let graph = GraphModel::build(n, None, &to_specs(n, &edges), &EngineLimits::default()).unwrap();
        let sp = floyd_warshall(&graph);
        for s in 0..n {
            for e in 0..n {
                match reconstruct(&sp, s, e) {
                    PathOutcome::Found { path, distance } => {
                        prop_assert_eq!(path.first(), Some(&s));
                        prop_assert_eq!(path.last(), Some(&e));
                        prop_assert!(path.len() <= n, "simple path has at most n nodes");
                        let mut sum = 0.0;
                        for w in path.windows(2) {
                            let edge = graph.adjacency()[(w[0], w[1])].finite();
                            prop_assert!(edge.is_some(), "{} and {} are not joined by an edge", w[0], w[1]);
                            sum += edge.unwrap_or_default();
                        }
                        prop_assert_eq!(sum, distance);
                        prop_assert_eq!(sp.distance(s, e), Distance::Finite(distance));
                    }
                    PathOutcome::NoPath => {
                        prop_assert!(s == e || sp.distance(s, e) == Distance::Unreachable);
                    }
                    PathOutcome::Unreliable => prop_assert!(false, "no negative cycle, walk must finish"),
                }
            }
        }
    }

    /// **Scenario**: With negative cycles, every walk stops within n+1 hops.
    #[test]
    fn reconstruction_terminates_with_negative_cycles((n, edges) in arb_graph(7, -9..=3)) {
        let sp = solve(n, &to_specs(n, &edges));
        for s in 0..n {
            for e in 0..n {
                if let PathOutcome::Found { path, .. } = reconstruct(&sp, s, e) {
                    prop_assert!(path.len() <= n + 2, "walk exceeded n+1 hops");
                }
            }
        }
    }
}

/// **Scenario**: Next hops toward C alternate between A and B; the walk runs out of hops.
///
/// Given: A→B(1), B→A(-3), B→C(1)  
/// When: reconstructing A→C and B→C  
/// Then: both are Unreliable, while dist(A,C) is still a finite matrix value
#[test]
fn walk_through_negative_cycle_is_unreliable() {
    let sp = solve(
        3,
        &[
            pathgraph::EdgeSpec::new("A", "B", 1.0),
            pathgraph::EdgeSpec::new("B", "A", -3.0),
            pathgraph::EdgeSpec::new("B", "C", 1.0),
        ],
    );
    assert!(sp.has_negative_cycle());
    assert_eq!(sp.distance(0, 2), Distance::Finite(0.0));
    assert_eq!(reconstruct(&sp, 0, 2), PathOutcome::Unreliable);
    assert_eq!(reconstruct(&sp, 1, 2), PathOutcome::Unreliable);
}

/// **Scenario**: A query starting and ending on a node of a negative cycle walks the cycle.
#[test]
fn start_equals_end_on_negative_cycle_walks_the_cycle() {
    let sp = solve(
        2,
        &[
            pathgraph::EdgeSpec::new("A", "B", 1.0),
            pathgraph::EdgeSpec::new("B", "A", -3.0),
        ],
    );
    match sp.path("A", "A") {
        PathOutcome::Found { path, distance } => {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&0));
            assert!(distance < 0.0);
        }
        PathOutcome::Unreliable => {}
        PathOutcome::NoPath => panic!("diagonal was relaxed, next(A,A) is set"),
    }
}
