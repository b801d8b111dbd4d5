//! Request bodies for compute, path query and remove-node.

use serde::{Deserialize, Serialize};

use crate::config::EngineLimits;
use crate::error::GraphError;
use crate::graph::{EdgeSpec, GraphModel};

/// Graph description shared by every request: the client-held session state.
///
/// `num_nodes` is accepted as an alias of `node_count`. Without `labels`, nodes
/// are labeled `A`, `B`, `C`, … in index order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(alias = "num_nodes")]
    pub node_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphPayload {
    /// Validates the payload into a [`GraphModel`].
    pub fn build(&self, limits: &EngineLimits) -> Result<GraphModel, GraphError> {
        GraphModel::build(self.node_count, self.labels.clone(), &self.edges, limits)
    }
}

/// Graph payload plus the endpoints of one point query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathQueryRequest {
    #[serde(flatten)]
    pub graph: GraphPayload,
    pub start: String,
    pub end: String,
}

/// Graph payload plus the label to remove.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveNodeRequest {
    #[serde(flatten)]
    pub graph: GraphPayload,
    #[serde(alias = "node")]
    pub node_to_remove: String,
}
