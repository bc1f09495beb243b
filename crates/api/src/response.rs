//! Shared response envelope.
//!
//! Every response from the todo routes, success or failure, is a
//! `{ "code": ..., "status": ..., "data": ... }` envelope. `data` is left out
//! when there is nothing to return.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Status label carried by every 2xx envelope.
pub const SUCCESS_LABEL: &str = "Success";

/// Standard `{ code, status, data }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Envelope::success(todo))
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// `200 Success` carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            status: SUCCESS_LABEL.to_string(),
            data: Some(data),
        }
    }

    /// An envelope for `status` with the given label and payload.
    pub fn new(status: StatusCode, label: &str, data: T) -> Self {
        Self {
            code: status.as_u16(),
            status: label.to_string(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// `200 Success` with no `data` field.
    pub fn empty() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            status: SUCCESS_LABEL.to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
