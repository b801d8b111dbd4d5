//! Request handlers: payload in, response or rejection out.
//!
//! Every call builds its own model and matrices and drops them on return, so
//! handlers can run concurrently on any number of threads without locking.

use crate::config::EngineLimits;
use crate::engine::floyd_warshall;
use crate::error::GraphError;
use crate::logging;

use super::request::{GraphPayload, PathQueryRequest, RemoveNodeRequest};
use super::response::{ComputeResponse, PathQueryResponse, RemoveNodeResponse};

/// Compute: distance matrix, next-hop matrix and warning flags.
pub fn compute(payload: &GraphPayload, limits: &EngineLimits) -> Result<ComputeResponse, GraphError> {
    let graph = payload
        .build(limits)
        .map_err(|e| rejected("compute", e))?;
    let paths = floyd_warshall(&graph);
    Ok(ComputeResponse::from(&paths))
}

/// Path query: recompute from scratch, then reconstruct `start` → `end`.
///
/// Unknown endpoints and unreachable targets are successful empty results.
pub fn query_path(
    request: &PathQueryRequest,
    limits: &EngineLimits,
) -> Result<PathQueryResponse, GraphError> {
    let graph = request
        .graph
        .build(limits)
        .map_err(|e| rejected("shortest_path_query", e))?;
    let paths = floyd_warshall(&graph);
    let outcome = paths.path(&request.start, &request.end);
    Ok(PathQueryResponse::from_outcome(&paths, &outcome))
}

/// Remove node: drop one node and its incident edges.
///
/// The label is matched exactly first, then upper-cased (the browser lets
/// users type `b` for node `B`).
pub fn remove_node(
    request: &RemoveNodeRequest,
    limits: &EngineLimits,
) -> Result<RemoveNodeResponse, GraphError> {
    let result = request.graph.build(limits).and_then(|graph| {
        let wanted = &request.node_to_remove;
        let label = if graph.label_index().contains(wanted) {
            wanted.clone()
        } else {
            wanted.to_uppercase()
        };
        graph
            .without_node(&label)
            .map_err(|_| GraphError::UnknownNode(wanted.clone()))
            .map(|smaller| RemoveNodeResponse::from_model(&label, &smaller))
    });
    result.map_err(|e| rejected("remove_node", e))
}

fn rejected(operation: &str, error: GraphError) -> GraphError {
    logging::log_request_rejected(operation, &error);
    error
}
