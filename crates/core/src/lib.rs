//! Domain types shared by the todo backend crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod todo;
pub mod types;
pub mod validation;
