//! Route definitions for the `/projects` resource.
//!
//! Also mounts the per-project action listing under
//! `/projects/{project_id}/actions`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{action, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{project_id}/actions", get(action::list_by_project))
}
