//! Handlers for the personal dictionary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use linguawise_core::error::CoreError;
use linguawise_core::search::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use linguawise_core::types::DbId;
use linguawise_db::models::dictionary::CreateDictionaryEntry;
use linguawise_db::repositories::DictionaryRepo;

use super::require_text;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dictionary?search=&limit=&offset=
pub async fn list_entries(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let entries = DictionaryRepo::list_for_user(
        &state.pool,
        &user.user_id,
        params.pattern().as_deref(),
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/dictionary
pub async fn create_entry(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDictionaryEntry>,
) -> AppResult<impl IntoResponse> {
    require_text("term", &input.term)?;
    require_text("translation", &input.translation)?;
    require_text("language", &input.language)?;

    let entry = DictionaryRepo::create(&state.pool, &user.user_id, &input).await?;

    tracing::info!(entry_id = entry.id, user_id = %user.user_id, "Dictionary entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// DELETE /api/v1/dictionary/{id}
pub async fn delete_entry(
    user: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DictionaryRepo::delete(&state.pool, &user.user_id, entry_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DictionaryEntry",
            id: entry_id,
        }));
    }

    tracing::info!(entry_id, user_id = %user.user_id, "Dictionary entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
