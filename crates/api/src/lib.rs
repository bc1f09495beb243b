//! Todo API server library.
//!
//! Exposes the building blocks (config, state, service, error mapping,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
