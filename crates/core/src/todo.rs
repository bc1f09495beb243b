//! Todo payloads and the status lifecycle.
//!
//! The request types carry their field rules as `validator` attributes; run
//! them through [`crate::validation::validate_request`] before touching the
//! store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::DbId;

/// Allowed todo status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Pending,
    Done,
}

impl TodoStatus {
    /// The value stored in the `todos.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::Done => "done",
        }
    }

    /// Resolve an optional request status, treating absent or empty as `pending`.
    pub fn from_request(status: Option<&str>) -> Result<Self, CoreError> {
        match status {
            None | Some("") => Ok(TodoStatus::default()),
            Some(value) => value.parse(),
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TodoStatus::Pending),
            "done" => Ok(TodoStatus::Done),
            other => Err(CoreError::Validation(vec![format!(
                "status: '{other}' is not one of pending, done"
            )])),
        }
    }
}

/// Body of `POST /todos`.
///
/// Missing fields decode to empty values so they are reported by validation
/// rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[serde(default)]
    #[validate(length(min = 2, max = 200, message = "must be between 2 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Body of `PUT /todos/{id}`. The `id` is always taken from the path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_required_id"))]
    pub id: DbId,

    #[serde(default)]
    #[validate(length(min = 2, max = 200, message = "must be between 2 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Read-only projection of a stored todo returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// An empty status means "not supplied" and passes.
fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.is_empty() || status.parse::<TodoStatus>().is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("oneof");
    err.message = Some("must be one of pending, done".into());
    Err(err)
}

/// Only zero counts as missing; unknown ids are left to the lookup.
fn validate_required_id(id: &DbId) -> Result<(), ValidationError> {
    if *id != 0 {
        return Ok(());
    }
    let mut err = ValidationError::new("required");
    err.message = Some("is required".into());
    Err(err)
}
