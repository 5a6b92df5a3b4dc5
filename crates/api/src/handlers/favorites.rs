//! Handlers for saved favorite translations.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use linguawise_core::error::CoreError;
use linguawise_core::language::Tone;
use linguawise_core::search::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use linguawise_core::types::DbId;
use linguawise_db::models::favorite::CreateFavorite;
use linguawise_db::repositories::FavoriteRepo;

use super::require_text;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/favorites?search=&limit=&offset=
pub async fn list_favorites(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let favorites = FavoriteRepo::list_for_user(
        &state.pool,
        &user.user_id,
        params.pattern().as_deref(),
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: favorites }))
}

/// POST /api/v1/favorites
pub async fn create_favorite(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    require_text("original_text", &input.original_text)?;
    require_text("translated_text", &input.translated_text)?;
    require_text("source_lang", &input.source_lang)?;
    require_text("target_lang", &input.target_lang)?;
    input.tone.parse::<Tone>()?;

    let favorite = FavoriteRepo::create(&state.pool, &user.user_id, &input).await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = %user.user_id,
        "Favorite created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}

/// DELETE /api/v1/favorites/{id}
pub async fn delete_favorite(
    user: AuthUser,
    State(state): State<AppState>,
    Path(favorite_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FavoriteRepo::delete(&state.pool, &user.user_id, favorite_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: favorite_id,
        }));
    }

    tracing::info!(favorite_id, user_id = %user.user_id, "Favorite deleted");

    Ok(StatusCode::NO_CONTENT)
}
