//! Handlers for the `/todos` resource.

use axum::extract::State;
use todo_core::todo::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};

use crate::error::AppResult;
use crate::extract::{JsonBody, TodoId};
use crate::response::Envelope;
use crate::state::AppState;

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodoRequest>,
) -> AppResult<Envelope<TodoResponse>> {
    let todo = state.todo_service.create(input).await?;
    Ok(Envelope::success(todo))
}

/// GET /todos
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope<Vec<TodoResponse>>> {
    let todos = state.todo_service.find_all().await?;
    Ok(Envelope::success(todos))
}

/// GET /todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> AppResult<Envelope<TodoResponse>> {
    let todo = state.todo_service.find_by_id(id).await?;
    Ok(Envelope::success(todo))
}

/// PUT /todos/{id}
///
/// The path id wins over any `id` in the body.
pub async fn update(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    JsonBody(mut input): JsonBody<UpdateTodoRequest>,
) -> AppResult<Envelope<TodoResponse>> {
    input.id = id;
    let todo = state.todo_service.update(input).await?;
    Ok(Envelope::success(todo))
}

/// DELETE /todos/{id}
pub async fn delete(State(state): State<AppState>, TodoId(id): TodoId) -> AppResult<Envelope<()>> {
    state.todo_service.delete(id).await?;
    Ok(Envelope::empty())
}
