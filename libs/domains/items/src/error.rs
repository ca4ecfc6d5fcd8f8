use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// The two failure modes the item repository can produce.
///
/// Both are deterministic given the current collection state and both are
/// recoverable by the caller; neither corrupts state.
#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Item not found: {0}")]
    NotFound(u64),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for the wire-level `{"detail": ...}` bodies
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::DuplicateName(name) => {
                AppError::BadRequest(format!("Item with name '{}' already exists", name))
            }
            ItemError::NotFound(_) => AppError::NotFound("Item not found".to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
