//! Handlers for the user's translation history.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use linguawise_core::error::CoreError;
use linguawise_core::search::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use linguawise_core::types::DbId;
use linguawise_db::models::favorite::CreateFavorite;
use linguawise_db::repositories::{FavoriteRepo, HistoryRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClearedHistory {
    pub deleted: u64,
}

/// GET /api/v1/history?search=&limit=&offset=
///
/// Newest first.
pub async fn list_history(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = HistoryRepo::list_for_user(
        &state.pool,
        &user.user_id,
        params.pattern().as_deref(),
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: items }))
}

/// DELETE /api/v1/history
///
/// Remove every history item of the authenticated user.
pub async fn clear_history(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let deleted = HistoryRepo::delete_all_for_user(&state.pool, &user.user_id).await?;

    tracing::info!(user_id = %user.user_id, deleted, "Translation history cleared");

    Ok(Json(DataResponse {
        data: ClearedHistory { deleted },
    }))
}

/// DELETE /api/v1/history/{id}
pub async fn delete_history_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(history_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = HistoryRepo::delete(&state.pool, &user.user_id, history_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TranslationHistoryItem",
            id: history_id,
        }));
    }

    tracing::info!(history_id, user_id = %user.user_id, "History item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/history/{id}/favorite
///
/// Save a copy of a history item as a favorite, stamped with the current time.
pub async fn favorite_history_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(history_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = HistoryRepo::find_by_id(&state.pool, &user.user_id, history_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TranslationHistoryItem",
            id: history_id,
        }))?;

    let favorite = FavoriteRepo::create(
        &state.pool,
        &user.user_id,
        &CreateFavorite::from_history(&item, Utc::now()),
    )
    .await?;

    tracing::info!(
        history_id,
        favorite_id = favorite.id,
        user_id = %user.user_id,
        "History item favorited",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}
