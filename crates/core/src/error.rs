use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One message per violated field rule, in field order.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing todo row.
    pub fn todo_not_found(id: DbId) -> Self {
        CoreError::NotFound { entity: "todo", id }
    }
}
