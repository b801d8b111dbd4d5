//! HTTP server exposing the shortest path engine.
//!
//! Routes (JSON in, JSON out):
//! - `POST /compute`: distance matrix, next-hop matrix, negative edge / cycle flags.
//! - `POST /shortest_path_query` (alias `POST /path`): one reconstructed route.
//! - `POST /remove_node`: graph payload minus one node and its edges.
//! - `GET /health`
//!
//! Configure via env: `LISTEN`, `PATHGRAPH_MAX_NODES`, `PATHGRAPH_BODY_LIMIT`, `LOG_FILE`.
//! See [`ServerConfig::from_env`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

pub use config::ServerConfig;
pub use error::ServerError;
pub use state::AppState;
pub use telemetry::init_tracing;

/// Builds the router with all routes and layers.
pub fn app(state: Arc<AppState>) -> Router {
    let body_limit = state.config.body_limit;
    Router::new()
        .route("/health", get(routes::health))
        .route("/compute", post(routes::compute))
        .route("/shortest_path_query", post(routes::shortest_path_query))
        .route("/path", post(routes::shortest_path_query))
        .route("/remove_node", post(routes::remove_node))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            middleware::log_request_body,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                info_span!("request", method = %req.method(), uri = %req.uri())
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
