use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory record store, created once at startup.
    pub pool: prootly_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
