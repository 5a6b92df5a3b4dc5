//! Public catalogue endpoints used to populate the language and tone pickers.

use axum::response::IntoResponse;
use axum::Json;
use linguawise_core::language::{Tone, LANGUAGES};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct ToneOption {
    pub value: Tone,
    pub label: &'static str,
}

/// GET /api/v1/languages
pub async fn list_languages() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse { data: LANGUAGES }))
}

/// GET /api/v1/tones
pub async fn list_tones() -> AppResult<impl IntoResponse> {
    let tones: Vec<ToneOption> = Tone::ALL
        .iter()
        .map(|&tone| ToneOption {
            value: tone,
            label: tone.label(),
        })
        .collect();

    Ok(Json(DataResponse { data: tones }))
}
