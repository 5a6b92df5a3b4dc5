//! Handlers for translation, speech synthesis and grammar checking.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use linguawise_core::translation::{TranslateForm, TranslationResult};
use linguawise_core::types::DbId;
use linguawise_db::models::history::CreateHistoryItem;
use linguawise_db::repositories::{HistoryRepo, SettingsRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Translation result plus the id of the history row it was saved as, when
/// the user keeps history.
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    #[serde(flatten)]
    pub result: TranslationResult,
    pub history_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct SpeechForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GrammarForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source_lang: String,
    #[serde(default)]
    pub target_lang: String,
}

/// POST /api/v1/translate
///
/// Validate the form, run the orchestrated translation and, if the user's
/// `save_history` setting is on, record it in their history. A failed history
/// write is logged and leaves `history_id` empty; the translation is still
/// returned.
pub async fn translate(
    user: AuthUser,
    State(state): State<AppState>,
    Json(form): Json<TranslateForm>,
) -> AppResult<impl IntoResponse> {
    let request = form.into_request()?;

    let settings = SettingsRepo::get_or_default(&state.pool, &user.user_id).await?;
    let result = state.translator.translate(&request).await?;

    let history_id = if settings.save_history {
        let item = CreateHistoryItem::from_translation(&request, &result);
        match HistoryRepo::create(&state.pool, &user.user_id, &item).await {
            Ok(row) => Some(row.id),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    user_id = %user.user_id,
                    "Failed to save translation history",
                );
                None
            }
        }
    } else {
        None
    };

    tracing::info!(
        user_id = %user.user_id,
        source_lang = %request.source_lang,
        target_lang = %request.target_lang,
        tone = %request.tone,
        ?history_id,
        "Translation completed",
    );

    Ok(Json(DataResponse {
        data: TranslateResponse { result, history_id },
    }))
}

/// POST /api/v1/speech
pub async fn synthesize_speech(
    user: AuthUser,
    State(state): State<AppState>,
    Json(form): Json<SpeechForm>,
) -> AppResult<impl IntoResponse> {
    let audio = state.translator.synthesize_speech(&form.text).await?;

    tracing::debug!(user_id = %user.user_id, "Speech synthesized");

    Ok(Json(DataResponse { data: audio }))
}

/// POST /api/v1/grammar
pub async fn check_grammar(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(form): Json<GrammarForm>,
) -> AppResult<impl IntoResponse> {
    let review = state
        .translator
        .check_grammar(&form.text, &form.source_lang, &form.target_lang)
        .await?;

    Ok(Json(DataResponse { data: review }))
}
