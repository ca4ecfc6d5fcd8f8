use axum::{http::StatusCode, response::Response};

use super::detail_response;

/// Handler for 404 Not Found errors.
///
/// Use as the router fallback so unknown paths get the same
/// `{"detail": ...}` body as every other error.
pub async fn not_found() -> Response {
    detail_response(
        StatusCode::NOT_FOUND,
        serde_json::Value::String("Not Found".to_string()),
    )
}
