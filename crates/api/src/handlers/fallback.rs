//! Fallbacks for requests no route handles.

use axum::http::{Method, StatusCode, Uri};

use crate::error::AppError;

/// Unknown path.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::with_status(
        StatusCode::NOT_FOUND,
        format!("Cannot {method} {}", uri.path()),
    )
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::with_status(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
