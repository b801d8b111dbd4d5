//! Route handlers. Each computation runs on the blocking pool.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use pathgraph::{
    ComputeResponse, GraphError, GraphPayload, PathQueryRequest, PathQueryResponse,
    RemoveNodeRequest, RemoveNodeResponse,
};
use tracing::debug;

use crate::error::ServerError;
use crate::state::AppState;

// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// POST /compute
pub async fn compute(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GraphPayload>,
) -> Result<Json<ComputeResponse>, ServerError> {
    debug!(
        node_count = payload.node_count,
        edges = payload.edges.len(),
        "compute"
    );
    let limits = state.config.limits;
    let response = run_blocking(move || pathgraph::compute(&payload, &limits)).await?;
    Ok(Json(response))
}

// POST /shortest_path_query (also /path)
pub async fn shortest_path_query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PathQueryRequest>,
) -> Result<Json<PathQueryResponse>, ServerError> {
    debug!(
        node_count = request.graph.node_count,
        start = %request.start,
        end = %request.end,
        "shortest path query"
    );
    let limits = state.config.limits;
    let response = run_blocking(move || pathgraph::query_path(&request, &limits)).await?;
    Ok(Json(response))
}

// POST /remove_node
pub async fn remove_node(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RemoveNodeRequest>,
) -> Result<Json<RemoveNodeResponse>, ServerError> {
    debug!(node = %request.node_to_remove, "remove node");
    let limits = state.config.limits;
    let response = run_blocking(move || pathgraph::remove_node(&request, &limits)).await?;
    Ok(Json(response))
}

/// Runs CPU-bound engine work off the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, ServerError>
where
    F: FnOnce() -> Result<T, GraphError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ServerError::Task(e.to_string()))?;
    Ok(result?)
}
