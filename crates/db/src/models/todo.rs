//! Todo row model.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::todo::TodoStatus;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Values for inserting a todo. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
}
