//! Dashboard usage statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use linguawise_core::statistics::{aggregate, UsageStatistics};
use linguawise_db::repositories::{DictionaryRepo, HistoryRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    #[serde(flatten)]
    pub usage: UsageStatistics,
    pub dictionary_terms: i64,
}

/// GET /api/v1/statistics
///
/// Aggregates the user's full history; the dictionary count is fetched
/// alongside it.
pub async fn get_statistics(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (history, dictionary_terms) = tokio::try_join!(
        HistoryRepo::list_all_for_user(&state.pool, &user.user_id),
        DictionaryRepo::count_for_user(&state.pool, &user.user_id),
    )?;

    let usage = aggregate(&history);

    Ok(Json(DataResponse {
        data: StatisticsResponse {
            usage,
            dictionary_terms,
        },
    }))
}
