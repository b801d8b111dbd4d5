//! Request rejection errors.
//!
//! Returned by [`GraphModel::build`](crate::graph::GraphModel::build) and the
//! protocol handlers when a payload cannot be turned into a graph. Negative
//! edges and negative cycles are not errors; they are reported as flags on
//! [`ShortestPaths`](crate::engine::ShortestPaths).

use thiserror::Error;

/// Error when a graph payload is rejected before any computation runs.
///
/// Every variant is local to one request: there is no shared state to corrupt,
/// so a rejected request never affects other in-flight computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge references a label that is not among the declared nodes.
    #[error("edge {from} -> {to} references an unknown node")]
    InvalidEdge { from: String, to: String },

    /// An edge weight is NaN, infinite, or not a number at all.
    #[error("edge {from} -> {to} has invalid weight {weight:?}; weights must be finite numbers")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    /// node_count exceeds the configured maximum.
    #[error("graph has {node_count} nodes, maximum is {max}")]
    GraphTooLarge { node_count: usize, max: usize },

    /// The same label was declared twice.
    #[error("duplicate node label: {0}")]
    DuplicateLabel(String),

    /// A declared label is the empty string (index of the offending label).
    #[error("node label at index {0} is empty")]
    EmptyLabel(usize),

    /// A declared label equals the unreachable marker used in response matrices.
    #[error("node label at index {0} is reserved: \"∞\" marks unreachable cells")]
    ReservedLabel(usize),

    /// Explicit labels were supplied but their count differs from node_count.
    #[error("{labels} labels supplied for {node_count} nodes")]
    LabelCountMismatch { labels: usize, node_count: usize },

    /// Remove-node request for a label that does not exist.
    #[error("node does not exist: {0}")]
    UnknownNode(String),
}

impl GraphError {
    /// Stable snake_case identifier used on the wire (`error.kind`).
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::InvalidEdge { .. } => "invalid_edge",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::GraphTooLarge { .. } => "graph_too_large",
            GraphError::DuplicateLabel(_) => "duplicate_label",
            GraphError::EmptyLabel(_) => "empty_label",
            GraphError::ReservedLabel(_) => "reserved_label",
            GraphError::LabelCountMismatch { .. } => "label_count_mismatch",
            GraphError::UnknownNode(_) => "unknown_node",
        }
    }
}
