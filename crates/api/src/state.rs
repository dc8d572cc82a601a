use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted. No other
/// state is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskpad_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
