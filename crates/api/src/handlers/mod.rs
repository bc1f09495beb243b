//! Request handlers.
//!
//! Handlers decode the request, delegate to the service in [`AppState`],
//! and wrap the result in an [`Envelope`]. Failures propagate as
//! [`AppError`] and are rendered by its `IntoResponse` impl.
//!
//! [`AppState`]: crate::state::AppState
//! [`Envelope`]: crate::response::Envelope
//! [`AppError`]: crate::error::AppError

pub mod fallback;
pub mod todo;
