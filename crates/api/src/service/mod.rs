//! Resource services: the write pipeline between handlers and repositories.
//!
//! Every write runs the same sequence: structural validation of the raw
//! submission, a snapshot read of the current rows, uniqueness (and, for
//! actions, parent-reference) checks against that snapshot, then the commit.
//! Reads and deletes pass straight through to the repositories. Services are
//! stateless; every call re-reads current state.

pub mod action;
pub mod project;

pub use action::ActionService;
pub use project::ProjectService;

use serde_json::{Map, Value};

use crate::error::AppError;

/// Borrow the submission as a JSON object map, rejecting non-object bodies.
fn as_record(payload: &Value) -> Result<&Map<String, Value>, AppError> {
    payload
        .as_object()
        .ok_or_else(|| AppError::BadRequest("request body must be a JSON object".to_string()))
}

/// Decode a validated submission into a typed DTO. The contract check has
/// already pinned the shape, so a decode failure here is a server bug.
fn decode<T: serde::de::DeserializeOwned>(payload: &Value) -> Result<T, AppError> {
    serde_json::from_value(payload.clone())
        .map_err(|e| AppError::InternalError(format!("validated submission failed to decode: {e}")))
}
