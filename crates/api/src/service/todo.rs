//! Todo service: validation, transaction scope, and not-found translation.

use async_trait::async_trait;
use futures::FutureExt;
use todo_core::error::CoreError;
use todo_core::todo::{CreateTodoRequest, TodoResponse, TodoStatus, UpdateTodoRequest};
use todo_core::types::DbId;
use todo_core::validation::validate_request;
use todo_db::models::todo::NewTodo;
use todo_db::repositories::TodoRepository;
use todo_db::transaction::{in_transaction, TxManager};
use todo_db::DbError;

use crate::error::{AppError, AppResult};
use crate::service::convert::{to_response, to_responses};

/// Operations exposed over `/todos`.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Validate and insert a todo. An absent or empty status becomes `pending`.
    async fn create(&self, request: CreateTodoRequest) -> AppResult<TodoResponse>;

    /// Validate and overwrite title, description and status of `request.id`.
    async fn update(&self, request: UpdateTodoRequest) -> AppResult<TodoResponse>;

    async fn delete(&self, id: DbId) -> AppResult<()>;

    async fn find_by_id(&self, id: DbId) -> AppResult<TodoResponse>;

    /// All todos by ascending id; empty when there are none.
    async fn find_all(&self) -> AppResult<Vec<TodoResponse>>;
}

/// [`TodoService`] over any transaction manager and matching repository.
///
/// Every operation, reads included, runs in exactly one transaction.
#[derive(Debug, Clone)]
pub struct TodoServiceImpl<M, R> {
    tx_manager: M,
    repo: R,
}

impl<M, R> TodoServiceImpl<M, R> {
    pub fn new(tx_manager: M, repo: R) -> Self {
        Self { tx_manager, repo }
    }
}

/// Map a repository miss on `id` to the domain `NotFound`.
fn or_not_found(id: DbId) -> impl FnOnce(DbError) -> AppError {
    move |err| match err {
        DbError::RecordNotFound => CoreError::todo_not_found(id).into(),
        other => other.into(),
    }
}

#[async_trait]
impl<M, R> TodoService for TodoServiceImpl<M, R>
where
    M: TxManager,
    R: TodoRepository<M::Tx> + Clone + 'static,
{
    async fn create(&self, request: CreateTodoRequest) -> AppResult<TodoResponse> {
        validate_request(&request)?;

        let input = NewTodo {
            status: TodoStatus::from_request(request.status.as_deref())?,
            title: request.title,
            description: request.description,
        };

        let repo = self.repo.clone();
        let todo = in_transaction(&self.tx_manager, move |tx| {
            async move {
                let todo = repo.save(tx, &input).await?;
                Ok::<_, AppError>(todo)
            }
            .boxed()
        })
        .await?;

        tracing::info!(todo_id = todo.id, status = %todo.status, "Todo created");
        Ok(to_response(todo))
    }

    async fn update(&self, request: UpdateTodoRequest) -> AppResult<TodoResponse> {
        validate_request(&request)?;

        // Defaulted before persisting so the stored row and the response agree.
        let status = TodoStatus::from_request(request.status.as_deref())?;
        let id = request.id;

        let repo = self.repo.clone();
        let todo = in_transaction(&self.tx_manager, move |tx| {
            async move {
                let mut todo = repo.find_by_id(tx, id).await.map_err(or_not_found(id))?;

                todo.title = request.title;
                todo.description = request.description;
                todo.status = status.as_str().to_string();

                let todo = repo.update(tx, &todo).await.map_err(or_not_found(id))?;
                Ok::<_, AppError>(todo)
            }
            .boxed()
        })
        .await?;

        tracing::info!(todo_id = todo.id, status = %todo.status, "Todo updated");
        Ok(to_response(todo))
    }

    async fn delete(&self, id: DbId) -> AppResult<()> {
        let repo = self.repo.clone();
        in_transaction(&self.tx_manager, move |tx| {
            async move {
                let todo = repo.find_by_id(tx, id).await.map_err(or_not_found(id))?;
                repo.delete(tx, todo.id).await.map_err(or_not_found(id))?;
                Ok::<_, AppError>(())
            }
            .boxed()
        })
        .await?;

        tracing::info!(todo_id = id, "Todo deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: DbId) -> AppResult<TodoResponse> {
        let repo = self.repo.clone();
        let todo = in_transaction(&self.tx_manager, move |tx| {
            async move {
                let todo = repo.find_by_id(tx, id).await.map_err(or_not_found(id))?;
                Ok::<_, AppError>(todo)
            }
            .boxed()
        })
        .await?;

        Ok(to_response(todo))
    }

    async fn find_all(&self) -> AppResult<Vec<TodoResponse>> {
        let repo = self.repo.clone();
        let todos = in_transaction(&self.tx_manager, move |tx| {
            async move {
                let todos = repo.find_all(tx).await?;
                Ok::<_, AppError>(todos)
            }
            .boxed()
        })
        .await?;

        Ok(to_responses(todos))
    }
}
