//! Handlers for per-user translation preferences.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use linguawise_db::models::settings::UpsertSettings;
use linguawise_db::repositories::SettingsRepo;

use super::require_text;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Returns the stored settings, or the defaults if the user never saved any.
pub async fn get_settings(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get_or_default(&state.pool, &user.user_id).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Merge the supplied fields into the user's settings.
pub async fn update_settings(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertSettings>,
) -> AppResult<impl IntoResponse> {
    if let Some(lang) = &input.native_language {
        require_text("native_language", lang)?;
    }
    if let Some(lang) = &input.default_target_language {
        require_text("default_target_language", lang)?;
    }

    let settings = SettingsRepo::upsert(&state.pool, &user.user_id, &input).await?;

    tracing::info!(
        user_id = %user.user_id,
        default_tone = %settings.default_tone,
        save_history = settings.save_history,
        "User settings updated",
    );

    Ok(Json(DataResponse { data: settings }))
}
