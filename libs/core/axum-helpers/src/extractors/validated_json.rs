//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{AppError, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// Malformed JSON and failed validation both come back as `{"detail": ...}`
/// bodies; validation failures use status 422 with one detail entry per
/// violated field constraint.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(range(min = 0.0))]
///     price: f64,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate().map_err(|e| {
            // One detail entry per violated constraint, keyed by field
            let details: Vec<serde_json::Value> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors
                        .iter()
                        .map(|err| {
                            json!({
                                "loc": ["body", field],
                                "msg": err.message.as_deref().unwrap_or(err.code.as_ref()),
                                "type": err.code,
                            })
                        })
                        .collect::<Vec<_>>()
                })
                .collect();

            let error_response = ErrorResponse {
                detail: serde_json::Value::Array(details),
            };

            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(error_response)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
