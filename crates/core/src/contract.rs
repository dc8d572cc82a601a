//! Field contracts for submitted records.
//!
//! Structural validation of an untyped JSON submission for a given resource
//! kind and write mode, independent of any existing records. Checks run in a
//! fixed order and stop at the first violation, so callers always receive a
//! single actionable message.

use serde::Serialize;
use serde_json::{Map, Value};

/// Upper bound on `name` (projects) and `description` (actions), in characters.
pub const MAX_LABEL_CHARS: usize = 128;

/// The resource kinds whose submissions can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Project,
    Action,
}

/// Whether a submission creates a new record or fully replaces one.
///
/// `completed` is forbidden on create (rows start out not completed) and
/// required on update (an update replaces the whole record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Update,
}

/// The closed set of ways a submission can violate its field contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent, null, or an empty string.
    MissingField,
    /// A field is present with the wrong JSON type.
    WrongType,
    /// A bounded text field exceeds [`MAX_LABEL_CHARS`].
    TooLong,
    /// The submission carries a field outside the allowed set for the mode.
    WrongFieldSet,
}

/// The first violation found in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

const PROJECT_CREATE_FIELDS: &[&str] = &["name", "description"];
const PROJECT_UPDATE_FIELDS: &[&str] = &["name", "description", "completed"];
const ACTION_CREATE_FIELDS: &[&str] = &["project_id", "description", "notes"];
const ACTION_UPDATE_FIELDS: &[&str] = &["project_id", "description", "notes", "completed"];

/// Validate a submitted record against the field contract for `kind` in
/// `mode`. Returns the first violation found, in contract order.
pub fn validate(
    kind: ResourceKind,
    mode: WriteMode,
    record: &Map<String, Value>,
) -> Result<(), FieldViolation> {
    match kind {
        ResourceKind::Project => validate_project(mode, record),
        ResourceKind::Action => validate_action(mode, record),
    }
}

fn validate_project(mode: WriteMode, record: &Map<String, Value>) -> Result<(), FieldViolation> {
    check_text(record, "name", Some(MAX_LABEL_CHARS))?;
    check_text(record, "description", None)?;
    let allowed = match mode {
        WriteMode::Create => PROJECT_CREATE_FIELDS,
        WriteMode::Update => {
            check_bool(record, "completed")?;
            PROJECT_UPDATE_FIELDS
        }
    };
    check_field_set(record, allowed)
}

fn validate_action(mode: WriteMode, record: &Map<String, Value>) -> Result<(), FieldViolation> {
    check_text(record, "description", Some(MAX_LABEL_CHARS))?;
    check_text(record, "notes", None)?;
    check_id(record, "project_id")?;
    let allowed = match mode {
        WriteMode::Create => ACTION_CREATE_FIELDS,
        WriteMode::Update => {
            check_bool(record, "completed")?;
            ACTION_UPDATE_FIELDS
        }
    };
    check_field_set(record, allowed)
}

/// Required non-empty string, optionally bounded in characters.
fn check_text(
    record: &Map<String, Value>,
    field: &str,
    max_chars: Option<usize>,
) -> Result<(), FieldViolation> {
    match record.get(field) {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(missing(field)),
        Some(Value::String(s)) => match max_chars {
            Some(max) if s.chars().count() > max => Err(too_long(field, max)),
            _ => Ok(()),
        },
        Some(_) => Err(wrong_type(field, "a string")),
    }
}

/// Required boolean.
fn check_bool(record: &Map<String, Value>, field: &str) -> Result<(), FieldViolation> {
    match record.get(field) {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(wrong_type(field, "a boolean")),
    }
}

/// Required integer id.
fn check_id(record: &Map<String, Value>, field: &str) -> Result<(), FieldViolation> {
    match record.get(field) {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::Number(n)) if n.is_i64() => Ok(()),
        Some(_) => Err(wrong_type(field, "an integer id")),
    }
}

/// Every submitted key must belong to the allowed set. Combined with the
/// per-field required checks above, this makes the submitted set exactly
/// the allowed one.
fn check_field_set(record: &Map<String, Value>, allowed: &[&str]) -> Result<(), FieldViolation> {
    for key in record.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(FieldViolation {
                field: key.clone(),
                kind: ViolationKind::WrongFieldSet,
                message: format!("unexpected field '{key}'; allowed fields are {allowed:?}"),
            });
        }
    }
    Ok(())
}

fn missing(field: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        kind: ViolationKind::MissingField,
        message: format!("missing required field '{field}'"),
    }
}

fn wrong_type(field: &str, expected: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        kind: ViolationKind::WrongType,
        message: format!("field '{field}' must be {expected}"),
    }
}

fn too_long(field: &str, max: usize) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        kind: ViolationKind::TooLong,
        message: format!("field '{field}' must be at most {max} characters"),
    }
}
