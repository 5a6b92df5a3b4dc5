use std::sync::Arc;

use linguawise_core::orchestrator::Translator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and translator are reference-counted inside.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: linguawise_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Translation orchestrator bound to the generative backend.
    pub translator: Translator,
}
