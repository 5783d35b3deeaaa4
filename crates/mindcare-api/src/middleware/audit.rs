use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Request logging middleware.
///
/// Emits one `api_request` event per call with latency, and tags session
/// routes with their session id. Answers and results are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let session_id = session_id_from_path(&path);

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match session_id {
        Some(session_id) => tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            session_id = %session_id,
            "api_request"
        ),
        None => tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "api_request"
        ),
    }
    if status.is_server_error() {
        tracing::warn!(method = %method, path = %path, "request failed");
    }

    response
}

/// The session id in `/sessions/{id}` and its sub-routes, if well-formed.
pub fn session_id_from_path(path: &str) -> Option<Uuid> {
    let mut segments = path.trim_start_matches('/').split('/');
    if segments.next()? != "sessions" {
        return None;
    }
    segments.next()?.parse().ok()
}
