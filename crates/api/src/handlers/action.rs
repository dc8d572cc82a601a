//! Handlers for the `/actions` resource.
//!
//! The per-project listing is mounted under the parent:
//! `/projects/{project_id}/actions`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use taskpad_core::error::CoreError;
use taskpad_core::types::DbId;
use taskpad_db::models::action::Action;

use crate::error::AppResult;
use crate::response::DeletionResponse;
use crate::service::ActionService;
use crate::state::AppState;

/// GET /actions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Action>>> {
    Ok(Json(ActionService::list(&state.pool).await?))
}

/// GET /actions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Action>> {
    Ok(Json(ActionService::get(&state.pool, id).await?))
}

/// GET /projects/{project_id}/actions
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Action>>> {
    Ok(Json(
        ActionService::list_for_project(&state.pool, project_id).await?,
    ))
}

/// POST /actions
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<Action>)> {
    let action = ActionService::create(&state.pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(action)))
}

/// PUT /actions/{id}
///
/// A successful replace answers 201 with the stored record.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<Action>)> {
    let action = ActionService::update(&state.pool, id, &payload).await?;
    Ok((StatusCode::CREATED, Json(action)))
}

/// DELETE /actions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletionResponse>> {
    let deleted = ActionService::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(CoreError::NotFound {
            entity: "Action",
            id,
        }
        .into());
    }
    Ok(Json(DeletionResponse { deleted }))
}
