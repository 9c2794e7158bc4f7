use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(name) => AppError::NotFound(format!("Item '{}' not found", name)),
            ItemError::DuplicateName(name) => {
                AppError::Conflict(format!("Item with name '{}' already exists", name))
            }
            ItemError::Validation(errors) => AppError::ValidationError(errors),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
