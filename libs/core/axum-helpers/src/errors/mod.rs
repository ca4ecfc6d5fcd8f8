pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error response carries a single `detail` field: a plain string for
/// business errors, a structured array for request-validation failures.
///
/// # JSON Examples
///
/// ```json
/// {"detail": "Item not found"}
/// ```
///
/// ```json
/// {"detail": [{"loc": ["body", "price"], "msg": "range", "type": "range"}]}
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error detail, or structured validation errors
    #[schema(value_type = Object)]
    pub detail: serde_json::Value,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain error enums convert into this type so every endpoint produces the
/// same `{"detail": ...}` body shape regardless of which layer failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), serde_json::Value::String(e.body_text()))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, serde_json::Value::String(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, serde_json::Value::String(msg))
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, serde_json::Value::String(msg))
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    serde_json::Value::String(msg),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::Value::String(msg),
                )
            }
        };

        detail_response(status, detail)
    }
}

/// Build a `{"detail": ...}` response with the given status.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::detail_response;
/// use axum::http::StatusCode;
///
/// let response = detail_response(
///     StatusCode::BAD_REQUEST,
///     serde_json::Value::String("Invalid input".to_string()),
/// );
/// ```
pub fn detail_response(status: StatusCode, detail: serde_json::Value) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}
