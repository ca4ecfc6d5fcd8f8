use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response body.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint handler.
///
/// Returns 200 with `{"status": "ok"}` whenever the process is up and
/// serving requests. No dependency checks happen here.
pub async fn health_handler() -> Response {
    let response = HealthResponse { status: "ok" };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router with the /health endpoint.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
///
/// let app = Router::new()
///     .merge(health_router())
///     .nest("/items", item_routes);
/// ```
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
