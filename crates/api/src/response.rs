//! Shared response body types for API handlers.

use serde::Serialize;

/// Body returned by DELETE endpoints: the number of rows removed.
///
/// Deletion reports a count rather than an empty 204 so clients can tell
/// "deleted" apart from "nothing to delete" without a follow-up request.
#[derive(Debug, Serialize)]
pub struct DeletionResponse {
    pub deleted: u64,
}
