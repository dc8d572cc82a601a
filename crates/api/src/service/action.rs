//! Write pipeline and reads for the `actions` resource.
//!
//! Action writes carry one check projects do not: the submitted
//! `project_id` must reference a live project at write time.

use serde_json::Value;
use sqlx::PgPool;
use taskpad_core::consistency;
use taskpad_core::contract::{self, ResourceKind, WriteMode};
use taskpad_core::error::CoreError;
use taskpad_core::types::DbId;
use taskpad_db::models::action::{Action, CreateAction, UpdateAction};
use taskpad_db::repositories::{ActionRepo, ProjectRepo};

use super::{as_record, decode};
use crate::error::{AppError, AppResult};

/// Orchestrates validation, consistency checks, and persistence for
/// actions.
pub struct ActionService;

impl ActionService {
    /// Create an action from a raw JSON submission.
    pub async fn create(pool: &PgPool, payload: &Value) -> AppResult<Action> {
        let record = as_record(payload)?;
        contract::validate(ResourceKind::Action, WriteMode::Create, record)
            .map_err(CoreError::Validation)?;
        let input: CreateAction = decode(payload)?;

        Self::check_consistency(pool, input.project_id, &input.description, None).await?;

        Ok(ActionRepo::create(pool, &input).await?)
    }

    /// Replace an action from a raw JSON submission. The target's own row
    /// is excluded from the uniqueness scan; the description is checked
    /// against the project the submission names, which may differ from the
    /// action's current one.
    pub async fn update(pool: &PgPool, id: DbId, payload: &Value) -> AppResult<Action> {
        let record = as_record(payload)?;
        contract::validate(ResourceKind::Action, WriteMode::Update, record)
            .map_err(CoreError::Validation)?;
        let input: UpdateAction = decode(payload)?;

        Self::check_consistency(pool, input.project_id, &input.description, Some(id)).await?;

        ActionRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Action", id }.into())
    }

    /// List all actions.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Action>> {
        Ok(ActionRepo::list(pool).await?)
    }

    /// Fetch one action by id.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Action> {
        ActionRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Action", id }.into())
    }

    /// List the actions under a project. Reports not-found both for a
    /// missing project and for a project with no actions.
    pub async fn list_for_project(pool: &PgPool, project_id: DbId) -> AppResult<Vec<Action>> {
        if ProjectRepo::find_by_id(pool, project_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into());
        }

        let actions = ActionRepo::list_by_project(pool, project_id).await?;
        if actions.is_empty() {
            return Err(AppError::NotFound(format!(
                "project {project_id} has no actions"
            )));
        }
        Ok(actions)
    }

    /// Delete an action, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<u64> {
        Ok(ActionRepo::delete(pool, id).await?)
    }

    /// Snapshot checks shared by create and update: description uniqueness
    /// within the submitted project, then the parent-reference check.
    async fn check_consistency(
        pool: &PgPool,
        project_id: DbId,
        description: &str,
        exclude_id: Option<DbId>,
    ) -> AppResult<()> {
        let actions = ActionRepo::list(pool).await?;
        if consistency::action_description_taken(
            actions.iter().map(|a| (a.id, a.project_id, a.description.as_str())),
            project_id,
            description,
            exclude_id,
        ) {
            return Err(CoreError::Conflict(format!(
                "an action with description '{description}' already exists in project {project_id}"
            ))
            .into());
        }

        let projects = ProjectRepo::list(pool).await?;
        if !consistency::project_exists(projects.iter().map(|p| p.id), project_id) {
            return Err(CoreError::InvalidReference {
                entity: "Project",
                id: project_id,
            }
            .into());
        }

        Ok(())
    }
}
