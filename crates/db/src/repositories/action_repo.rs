//! Repository for the `actions` table.

use sqlx::PgPool;
use taskpad_core::types::DbId;

use crate::models::action::{Action, CreateAction, UpdateAction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, description, notes, completed, created_at, updated_at";

/// Provides CRUD operations for actions.
pub struct ActionRepo;

impl ActionRepo {
    /// Insert a new action, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateAction) -> Result<Action, sqlx::Error> {
        let query = format!(
            "INSERT INTO actions (project_id, description, notes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an action by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions WHERE id = $1");
        sqlx::query_as::<_, Action>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actions in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions ORDER BY id");
        sqlx::query_as::<_, Action>(&query).fetch_all(pool).await
    }

    /// List the actions belonging to one project, in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Action>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an action's contract fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAction,
    ) -> Result<Option<Action>, sqlx::Error> {
        let query = format!(
            "UPDATE actions SET project_id = $2, description = $3, notes = $4, completed = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete an action by ID, returning the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
