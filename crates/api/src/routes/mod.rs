//! Route tree builders.

pub mod action;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// GET    /projects                        -> list
/// POST   /projects                        -> create
/// GET    /projects/{id}                   -> get_by_id
/// PUT    /projects/{id}                   -> update
/// DELETE /projects/{id}                   -> delete
/// GET    /projects/{project_id}/actions   -> list_by_project
///
/// GET    /actions                         -> list
/// POST   /actions                         -> create
/// GET    /actions/{id}                    -> get_by_id
/// PUT    /actions/{id}                    -> update
/// DELETE /actions/{id}                    -> delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/actions", action::router())
}
