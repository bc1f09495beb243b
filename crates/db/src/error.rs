/// Failures surfaced by the repository and transaction layers.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The addressed row does not exist. Kept apart from other failures so
    /// callers can turn it into a domain "not found".
    #[error("record not found")]
    RecordNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
