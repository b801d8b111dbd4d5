//! Properties that must hold for every graph.

use pathgraph::{floyd_warshall, Distance, EngineLimits, GraphModel, ShortestPaths};
use proptest::prelude::*;

use crate::common::{arb_graph, solve, to_specs};

fn diagonal_negative(sp: &ShortestPaths) -> bool {
    (0..sp.node_count()).any(|i| matches!(sp.distance(i, i), Distance::Finite(d) if d < 0.0))
}

/// dist(i,j) ≤ dist(i,k) + dist(k,j) for every reachable i→k→j.
fn check_triangle_inequality(sp: &ShortestPaths) -> Result<(), TestCaseError> {
    let n = sp.node_count();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                if let (Some(ik), Some(kj)) = (sp.distance(i, k).finite(), sp.distance(k, j).finite()) {
                    let ij = sp.distance(i, j).finite();
                    prop_assert!(ij.is_some(), "i={} reaches j={} through k={}", i, j, k);
                    prop_assert!(ij.unwrap_or(f64::MAX) <= ik + kj, "d({},{}) > d({},{}) + d({},{})", i, j, i, k, k, j);
                }
            }
        }
    }
    Ok(())
}

proptest! {
    /// **Scenario**: Non-negative weights: no cycle flag, zero diagonal, triangle inequality.
    #[test]
    fn triangle_inequality_and_zero_diagonal_without_negative_cycles(
        (n, edges) in arb_graph(10, 0..=20)
    ) {
        let sp = solve(n, &to_specs(n, &edges));
        prop_assert!(!sp.has_negative_cycle());
        for i in 0..n {
            prop_assert_eq!(sp.distance(i, i), Distance::ZERO);
        }
        check_triangle_inequality(&sp)?;
    }

    /// **Scenario**: Mixed-sign weights: the flag equals "some diagonal is negative",
    /// and without a cycle the triangle inequality still holds.
    #[test]
    fn negative_cycle_flag_matches_diagonal((n, edges) in arb_graph(8, -4..=12)) {
        let sp = solve(n, &to_specs(n, &edges));
        let negative = diagonal_negative(&sp);
        prop_assert_eq!(sp.has_negative_cycle(), negative);
        prop_assert_eq!(sp.negative_cycle_nodes().is_empty(), !negative);
        if !negative {
            check_triangle_inequality(&sp)?;
        }
    }

    /// **Scenario**: Same payload twice gives bit-identical matrices.
    #[test]
    fn compute_is_idempotent((n, edges) in arb_graph(12, -2..=30)) {
        let graph = GraphModel::build(n, None, &to_specs(n, &edges), &EngineLimits::default()).unwrap();
        let first = floyd_warshall(&graph);
        let second = floyd_warshall(&graph);
        let bits = |sp: &ShortestPaths| -> Vec<Option<u64>> {
            sp.distances()
                .to_rows()
                .into_iter()
                .flatten()
                .map(|d| d.finite().map(f64::to_bits))
                .collect()
        };
        prop_assert_eq!(bits(&first), bits(&second));
        prop_assert_eq!(first, second);
    }
}

/// **Scenario**: A lone edge u→v(w) gives dist(u,v)=w and next(u,v)=v.
#[test]
fn single_edge_sets_distance_and_hop() {
    for w in [-7.5, 0.0, 3.25, 1e9] {
        let sp = solve(4, &[pathgraph::EdgeSpec::new("C", "A", w)]);
        assert_eq!(sp.distance(2, 0), Distance::Finite(w));
        assert_eq!(sp.next_hop(2, 0), Some(0));
        assert_eq!(sp.distance(0, 2), Distance::Unreachable);
    }
}
