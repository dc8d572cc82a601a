//! Route definitions for the `/actions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::action;
use crate::state::AppState;

/// Routes mounted at `/actions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(action::list).post(action::create))
        .route(
            "/{id}",
            get(action::get_by_id)
                .put(action::update)
                .delete(action::delete),
        )
}
