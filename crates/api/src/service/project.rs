//! Write pipeline and reads for the `projects` resource.

use serde_json::Value;
use sqlx::PgPool;
use taskpad_core::consistency;
use taskpad_core::contract::{self, ResourceKind, WriteMode};
use taskpad_core::error::CoreError;
use taskpad_core::types::DbId;
use taskpad_db::models::project::{CreateProject, Project, UpdateProject};
use taskpad_db::repositories::ProjectRepo;

use super::{as_record, decode};
use crate::error::AppResult;

/// Orchestrates validation, consistency checks, and persistence for
/// projects.
pub struct ProjectService;

impl ProjectService {
    /// Create a project from a raw JSON submission.
    pub async fn create(pool: &PgPool, payload: &Value) -> AppResult<Project> {
        let record = as_record(payload)?;
        contract::validate(ResourceKind::Project, WriteMode::Create, record)
            .map_err(CoreError::Validation)?;
        let input: CreateProject = decode(payload)?;

        let projects = ProjectRepo::list(pool).await?;
        if consistency::project_name_taken(
            projects.iter().map(|p| (p.id, p.name.as_str())),
            &input.name,
            None,
        ) {
            return Err(duplicate_name(&input.name).into());
        }

        Ok(ProjectRepo::create(pool, &input).await?)
    }

    /// Replace a project from a raw JSON submission. The target's own row
    /// is excluded from the uniqueness scan.
    pub async fn update(pool: &PgPool, id: DbId, payload: &Value) -> AppResult<Project> {
        let record = as_record(payload)?;
        contract::validate(ResourceKind::Project, WriteMode::Update, record)
            .map_err(CoreError::Validation)?;
        let input: UpdateProject = decode(payload)?;

        let projects = ProjectRepo::list(pool).await?;
        if consistency::project_name_taken(
            projects.iter().map(|p| (p.id, p.name.as_str())),
            &input.name,
            Some(id),
        ) {
            return Err(duplicate_name(&input.name).into());
        }

        ProjectRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Project", id }.into())
    }

    /// List all projects.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Project>> {
        Ok(ProjectRepo::list(pool).await?)
    }

    /// Fetch one project by id.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Project> {
        ProjectRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Project", id }.into())
    }

    /// Delete a project, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<u64> {
        Ok(ProjectRepo::delete(pool, id).await?)
    }
}

fn duplicate_name(name: &str) -> CoreError {
    CoreError::Conflict(format!("a project named '{name}' already exists"))
}
