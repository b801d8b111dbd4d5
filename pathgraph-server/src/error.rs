//! HTTP error mapping. Body: `{ "error": { "kind", "message" } }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pathgraph::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("computation task failed: {0}")]
    Task(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Graph(GraphError::GraphTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Graph(GraphError::UnknownNode(_)) => StatusCode::NOT_FOUND,
            ServerError::Graph(_) => StatusCode::BAD_REQUEST,
            ServerError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ServerError::Graph(e) => e.kind(),
            ServerError::Task(_) => "internal",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({
            "error": { "kind": self.kind(), "message": self.to_string() }
        });
        (status, Json(body)).into_response()
    }
}
