// Request body extraction aligned with the field-error contract

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor. Wraps `axum::Json` so that undeserializable bodies
/// (wrong-typed or unknown fields, malformed JSON, missing content type)
/// surface as a 400 field error on `body` instead of axum's default 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::validation("body", &rejection.body_text())),
        }
    }
}
