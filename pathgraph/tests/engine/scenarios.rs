//! Reference graphs with known answers.

use pathgraph::{
    compute, query_path, Distance, EdgeSpec, EngineLimits, GraphPayload, PathOutcome,
    PathQueryRequest, PathStatus,
};

use crate::common::solve;

/// **Scenario**: nodes {A,B,C}, A→B(1), B→C(2).
///
/// Given: a two-edge chain  
/// When: computing all pairs and querying A→C  
/// Then: dist(A,C)=3, next(A,C)=B, path [A,B,C] with distance 3
#[test]
fn chain_of_two_edges() {
    let sp = solve(3, &[EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("B", "C", 2.0)]);
    assert_eq!(sp.distance(0, 2), Distance::Finite(3.0));
    assert_eq!(sp.next_hop(0, 2), Some(1));

    let req = PathQueryRequest {
        graph: GraphPayload {
            node_count: 3,
            labels: None,
            edges: vec![EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("B", "C", 2.0)],
        },
        start: "A".into(),
        end: "C".into(),
    };
    let resp = query_path(&req, &EngineLimits::default()).unwrap();
    assert_eq!(resp.path, vec!["A", "B", "C"]);
    assert_eq!(resp.distance, Some(3.0));
    assert_eq!(resp.status, PathStatus::Found);
    assert!(!resp.negative_cycle);
}

/// **Scenario**: nodes {A,B}, A→B(1), B→A(-3).
///
/// Then: dist(A,A) = -2 < 0 and the negative cycle flag is set; no error is raised.
#[test]
fn two_node_negative_cycle() {
    let sp = solve(2, &[EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("B", "A", -3.0)]);
    assert!(sp.has_negative_cycle());
    assert!(sp.has_negative_edge());
    match sp.distance(0, 0) {
        Distance::Finite(d) => assert!(d < 0.0, "diagonal should be negative, got {}", d),
        Distance::Unreachable => panic!("diagonal cannot be unreachable"),
    }

    let payload = GraphPayload {
        node_count: 2,
        labels: None,
        edges: vec![EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("B", "A", -3.0)],
    };
    let resp = compute(&payload, &EngineLimits::default()).unwrap();
    assert!(resp.negative_cycle);
    assert!(resp.negative_edge_warning);
}

/// **Scenario**: nodes {A,B,C} with only A→B(5).
///
/// Then: dist(A,C) is unreachable ("∞" on the wire); query A→C is empty with null distance.
#[test]
fn disconnected_target() {
    let sp = solve(3, &[EdgeSpec::new("A", "B", 5.0)]);
    assert_eq!(sp.distance(0, 2), Distance::Unreachable);
    assert_eq!(sp.path("A", "C"), PathOutcome::NoPath);

    let payload = GraphPayload {
        node_count: 3,
        labels: None,
        edges: vec![EdgeSpec::new("A", "B", 5.0)],
    };
    let json = serde_json::to_value(compute(&payload, &EngineLimits::default()).unwrap()).unwrap();
    assert_eq!(json["distance_matrix"][0][2], "∞");
    assert_eq!(json["next_matrix"][0][2], "∞");
    assert_eq!(json["distance_matrix"][0][1], 5.0);

    let req = PathQueryRequest {
        graph: payload,
        start: "A".into(),
        end: "C".into(),
    };
    let json = serde_json::to_value(query_path(&req, &EngineLimits::default()).unwrap()).unwrap();
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["distance"].is_null());
    assert_eq!(json["status"], "no_path");
}

/// **Scenario**: A→B(1) then A→B(9); last write wins.
#[test]
fn duplicate_edge_last_wins() {
    let sp = solve(2, &[EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("A", "B", 9.0)]);
    assert_eq!(sp.distance(0, 1), Distance::Finite(9.0));
    assert_eq!(sp.next_hop(0, 1), Some(1));
}

/// **Scenario**: caller-supplied labels beyond the alphabet work end to end.
#[test]
fn custom_labels() {
    let payload = GraphPayload {
        node_count: 3,
        labels: Some(vec!["home".into(), "office".into(), "gym".into()]),
        edges: vec![
            EdgeSpec::new("home", "office", 4.0),
            EdgeSpec::new("office", "gym", 1.5),
            EdgeSpec::new("home", "gym", 7.0),
        ],
    };
    let resp = compute(&payload, &EngineLimits::default()).unwrap();
    assert_eq!(resp.labels, vec!["home", "office", "gym"]);
    assert_eq!(resp.distance_matrix[0][2], Distance::Finite(5.5));
    assert_eq!(resp.next_matrix[0][2], "office");
}
