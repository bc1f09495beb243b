//! Service layer.
//!
//! Services validate input, run each operation inside one transaction, and
//! translate store outcomes into domain errors. Handlers only talk to the
//! [`TodoService`] trait.

pub mod convert;
pub mod todo;

pub use todo::{TodoService, TodoServiceImpl};
