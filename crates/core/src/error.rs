use crate::contract::FieldViolation;
use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every failure a service can report falls into one of these kinds; the
/// HTTP layer maps each kind to exactly one status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An operation targeted an id that does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A submitted record failed its field contract.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldViolation),

    /// A write would violate a uniqueness rule.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A submitted record references a parent that does not exist.
    #[error("{entity} with id {id} does not exist")]
    InvalidReference { entity: &'static str, id: DbId },
}
