//! Repository layer.
//!
//! Repositories are thin pass-throughs to the store. Every method takes the
//! caller's open transaction handle explicitly; none of them begin, commit,
//! or hold business rules.

pub mod todo_repo;

pub use todo_repo::{PgTodoRepo, TodoRepository};
