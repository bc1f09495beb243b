//! Row to payload conversion.

use todo_core::todo::TodoResponse;
use todo_db::models::todo::Todo;

pub fn to_response(todo: Todo) -> TodoResponse {
    TodoResponse {
        id: todo.id,
        title: todo.title,
        description: todo.description,
        status: todo.status,
    }
}

pub fn to_responses(todos: Vec<Todo>) -> Vec<TodoResponse> {
    todos.into_iter().map(to_response).collect()
}
