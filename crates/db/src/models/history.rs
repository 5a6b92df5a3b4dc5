//! Translation history models and DTOs.

use linguawise_core::statistics::TranslationRecord;
use linguawise_core::translation::{TranslationRequest, TranslationResult};
use linguawise_core::types::{DbId, Timestamp, UserId};
use linguawise_core::view::Keyed;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `translation_history` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TranslationHistoryItem {
    pub id: DbId,
    pub user_id: UserId,
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: String,
    #[sqlx(rename = "translated_at")]
    pub timestamp: Timestamp,
}

impl TranslationRecord for TranslationHistoryItem {
    fn original_text(&self) -> &str {
        &self.original_text
    }

    fn target_lang(&self) -> &str {
        &self.target_lang
    }

    fn recorded_at(&self) -> Option<Timestamp> {
        Some(self.timestamp)
    }
}

impl Keyed for TranslationHistoryItem {
    fn key(&self) -> DbId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a history row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateHistoryItem {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: String,
}

impl CreateHistoryItem {
    /// Build the history row for a completed translation.
    pub fn from_translation(request: &TranslationRequest, result: &TranslationResult) -> Self {
        Self {
            original_text: request.original_text.clone(),
            translated_text: result.translated_text.clone(),
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
            tone: request.tone.as_str().to_string(),
        }
    }
}
