//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use taskpad_core::error::CoreError;
use taskpad_core::types::DbId;
use taskpad_db::models::project::Project;

use crate::error::AppResult;
use crate::response::DeletionResponse;
use crate::service::ProjectService;
use crate::state::AppState;

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(ProjectService::list(&state.pool).await?))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    Ok(Json(ProjectService::get(&state.pool, id).await?))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectService::create(&state.pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /projects/{id}
///
/// A successful replace answers 201 with the stored record.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectService::update(&state.pool, id, &payload).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletionResponse>> {
    let deleted = ProjectService::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(CoreError::NotFound {
            entity: "Project",
            id,
        }
        .into());
    }
    Ok(Json(DeletionResponse { deleted }))
}
