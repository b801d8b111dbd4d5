//! Response bodies. Unreachable cells are the string `"∞"`.

use serde::Serialize;

use crate::engine::{Distance, ShortestPaths, UNREACHABLE_MARKER};
use crate::graph::{Edge, GraphModel};
use crate::query::PathOutcome;

/// Full all-pairs result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComputeResponse {
    pub labels: Vec<String>,
    pub distance_matrix: Vec<Vec<Distance>>,
    pub next_matrix: Vec<Vec<String>>,
    pub negative_edge_warning: bool,
    pub negative_cycle: bool,
}

impl From<&ShortestPaths> for ComputeResponse {
    fn from(paths: &ShortestPaths) -> Self {
        let next_matrix = paths
            .next_hop_labels()
            .rows()
            .map(|row| {
                row.iter()
                    .map(|hop| hop.unwrap_or(UNREACHABLE_MARKER).to_string())
                    .collect()
            })
            .collect();
        Self {
            labels: paths.labels().to_vec(),
            distance_matrix: paths.distances().to_rows(),
            next_matrix,
            negative_edge_warning: paths.has_negative_edge(),
            negative_cycle: paths.has_negative_cycle(),
        }
    }
}

/// Outcome tag of a point query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    NoPath,
    Unreliable,
}

/// Point query result: `path` is empty and `distance` null unless found.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathQueryResponse {
    pub path: Vec<String>,
    pub distance: Option<f64>,
    pub negative_cycle: bool,
    pub status: PathStatus,
}

impl PathQueryResponse {
    pub fn from_outcome(paths: &ShortestPaths, outcome: &PathOutcome) -> Self {
        let status = match outcome {
            PathOutcome::Found { .. } => PathStatus::Found,
            PathOutcome::NoPath => PathStatus::NoPath,
            PathOutcome::Unreliable => PathStatus::Unreliable,
        };
        Self {
            path: outcome.labels(paths.label_index()),
            distance: outcome.distance(),
            negative_cycle: paths.has_negative_cycle(),
            status,
        }
    }
}

/// Graph after a node was removed; the client replaces its session state with this.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RemoveNodeResponse {
    pub message: String,
    pub node_count: usize,
    pub labels: Vec<String>,
    pub edges: Vec<Edge>,
}

impl RemoveNodeResponse {
    pub fn from_model(removed: &str, graph: &GraphModel) -> Self {
        Self {
            message: format!("Node {} removed successfully.", removed),
            node_count: graph.node_count(),
            labels: graph.labels().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }
}
