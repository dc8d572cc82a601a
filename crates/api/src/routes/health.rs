use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health -- service and database health.
///
/// Answers 200 while the database is reachable and 503 once it is not, so
/// load balancers can act on the status code alone.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match taskpad_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "version": env!("CARGO_PKG_VERSION"),
                "database": "ok",
                "timestamp": now,
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "version": env!("CARGO_PKG_VERSION"),
                    "database": "unreachable",
                    "timestamp": now,
                })),
            )
        }
    }
}

/// Mount health check routes (root-level, not under a resource prefix).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
