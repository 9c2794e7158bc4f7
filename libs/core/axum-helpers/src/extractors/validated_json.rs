//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Json, OptionalFromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Rejects with [`AppError::JsonExtractorRejection`] when the body is not
/// valid JSON for `T` and with [`AppError::ValidationError`] when
/// `T::validate` fails, so both render the standard error envelope.
///
/// `Option<ValidatedJson<T>>` yields `None` when the request body is empty,
/// whatever its `Content-Type`, so bodiless requests reach the handler.
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
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

impl<T, S> OptionalFromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let (parts, body) = req.into_parts();

        // Extensions carry the body limit configured for the route
        let mut body_req = Request::new(body);
        *body_req.extensions_mut() = parts.extensions.clone();
        let bytes = <Bytes as FromRequest<S>>::from_request(body_req, state)
            .await
            .map_err(JsonRejection::from)?;

        if bytes.is_empty() {
            return Ok(None);
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        <Self as FromRequest<S>>::from_request(req, state)
            .await
            .map(Some)
    }
}
