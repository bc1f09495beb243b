use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: todo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Todo operations; each call runs in its own transaction.
    pub todo_service: Arc<dyn TodoService>,
}
