//! Request logging middleware.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Buffers the body up to the configured limit, logs method, URI and size at
/// debug, then forwards the request. Bodies over the limit get 413.
pub async fn log_request_body(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, state.config.body_limit).await.map_err(|e| {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            axum::Json(serde_json::json!({
                "error": { "kind": "body_too_large", "message": e.to_string() }
            })),
        )
            .into_response()
    })?;
    tracing::debug!(method = %parts.method, uri = %parts.uri, bytes = bytes.len(), "request");
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
