use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Service error that renders as a `{kind, message}` JSON body.
///
/// Each service keeps its own error enum and implements this trait so that
/// status mapping, logging and body shape stay identical across services.
pub trait ApiError: std::error::Error {
    /// Stable SCREAMING_SNAKE identifier for clients.
    fn kind(&self) -> &'static str;

    fn status(&self) -> StatusCode;

    /// Root cause for 500s; `None` for expected client errors.
    fn internal(&self) -> Option<&anyhow::Error> {
        None
    }
}

/// Build the JSON error response for any [`ApiError`].
pub fn error_response<E: ApiError>(err: &E) -> Response {
    // Only 500s are logged here; TraceLayer records method, uri and status for every request.
    if let Some(cause) = err.internal() {
        tracing::error!(error = %cause, kind = err.kind(), "internal error");
    }
    let body = serde_json::json!({
        "kind": err.kind(),
        "message": err.to_string(),
    });
    (err.status(), axum::Json(body)).into_response()
}
