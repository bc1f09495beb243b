//! Extractors whose rejections are [`AppError`]s, so decoding failures reach
//! clients in the same envelope as every other failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use todo_core::types::DbId;

use crate::error::AppError;

/// Numeric `{id}` path segment of the `/todos/{id}` routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for TodoId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        raw.parse::<DbId>()
            .map(TodoId)
            .map_err(|_| AppError::bad_request("todoId must be a number"))
    }
}

/// JSON request body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// Every body decoding failure is the client's fault.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
