//! Liveness and readiness check for load balancers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when storage answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub database_up: bool,
    /// Model behind `/translate`, `/grammar` and suggestions. The backend is
    /// not called by this check.
    pub text_model: String,
}

/// GET /health
///
/// 200 while the database answers a ping, 503 when it does not, so an
/// instance without storage is taken out of rotation.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database_up = linguawise_db::health_check(&state.pool).await.is_ok();
    if !database_up {
        tracing::warn!("Health check: database unreachable");
    }

    let (code, status) = if database_up {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status,
        database_up,
        text_model: state.translator.text_model().to_string(),
    };
    (code, Json(report))
}

/// `/health`, mounted at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
