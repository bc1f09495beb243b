//! Repository for the `todos` table.

use async_trait::async_trait;
use todo_core::types::DbId;

use crate::error::DbError;
use crate::models::todo::{NewTodo, Todo};
use crate::transaction::PgTx;

/// Column list for todos queries.
const COLUMNS: &str = "id, title, description, status, created_at, updated_at";

/// CRUD operations on todos, run inside a caller-supplied transaction `Tx`.
#[async_trait]
pub trait TodoRepository<Tx: Send>: Send + Sync {
    /// Insert a todo, returning the row with its store-assigned id and timestamps.
    async fn save(&self, tx: &mut Tx, input: &NewTodo) -> Result<Todo, DbError>;

    /// Overwrite title, description and status of an existing row.
    async fn update(&self, tx: &mut Tx, todo: &Todo) -> Result<Todo, DbError>;

    async fn delete(&self, tx: &mut Tx, id: DbId) -> Result<(), DbError>;

    /// Fails with [`DbError::RecordNotFound`] when no row has `id`.
    async fn find_by_id(&self, tx: &mut Tx, id: DbId) -> Result<Todo, DbError>;

    /// All todos, ordered by id ascending.
    async fn find_all(&self, tx: &mut Tx) -> Result<Vec<Todo>, DbError>;
}

/// Postgres-backed [`TodoRepository`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PgTodoRepo;

#[async_trait]
impl TodoRepository<PgTx> for PgTodoRepo {
    async fn save(&self, tx: &mut PgTx, input: &NewTodo) -> Result<Todo, DbError> {
        let query = format!(
            "INSERT INTO todos (title, description, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_one(&mut **tx)
            .await?;
        Ok(todo)
    }

    async fn update(&self, tx: &mut PgTx, todo: &Todo) -> Result<Todo, DbError> {
        let query = format!(
            "UPDATE todos SET
                title = $2,
                description = $3,
                status = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(todo.id)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(&todo.status)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or(DbError::RecordNotFound)
    }

    async fn delete(&self, tx: &mut PgTx, id: DbId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::RecordNotFound);
        }
        Ok(())
    }

    async fn find_by_id(&self, tx: &mut PgTx, id: DbId) -> Result<Todo, DbError> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or(DbError::RecordNotFound)
    }

    async fn find_all(&self, tx: &mut PgTx) -> Result<Vec<Todo>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC");
        let todos = sqlx::query_as::<_, Todo>(&query)
            .fetch_all(&mut **tx)
            .await?;
        Ok(todos)
    }
}
