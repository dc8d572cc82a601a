//! Action entity model and DTOs.
//!
//! Every action belongs to exactly one project; `project_id` is enforced by
//! a foreign key with ON DELETE CASCADE.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskpad_core::types::{DbId, Timestamp};

/// An action row from the `actions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Action {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new action. New rows start out not completed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAction {
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
}

/// DTO for replacing an existing action. An update is a full-record
/// replace, so every contract field is required, including `completed`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAction {
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}
