use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::error::CoreError;
use todo_db::DbError;

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for store failures,
/// and adds a transport variant that already carries its status code.
/// [`IntoResponse`] is the only place any of these become an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository or transaction failure from `todo_db`.
    #[error(transparent)]
    Database(#[from] DbError),

    /// A transport-level failure with an explicit status, surfaced as-is.
    #[error("{message}")]
    Http { status: StatusCode, message: String },
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::Http {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Http {
            status,
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(DbError::RecordNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(DbError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Http { status, .. } => *status,
        }
    }
}

/// Envelope `status` label for an HTTP status.
pub fn status_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BAD REQUEST",
        StatusCode::NOT_FOUND => "NOT FOUND",
        StatusCode::INTERNAL_SERVER_ERROR => "INTERNAL SERVICE ERROR",
        _ => "ERROR",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        Envelope::new(status, status_label(status), message).into_response()
    }
}

/// Render a panic caught by the middleware stack as a 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Core(CoreError::Internal(detail)).into_response()
}

/// Replace the empty 408 produced by the timeout layer with an envelope.
pub async fn timeout_response(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::with_status(StatusCode::REQUEST_TIMEOUT, "request timed out")
            .into_response();
    }
    response
}
