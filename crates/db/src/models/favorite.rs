//! Favorite translation models and DTOs.

use linguawise_core::types::{DbId, Timestamp, UserId};
use linguawise_core::view::Keyed;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::history::TranslationHistoryItem;

/// A row from the `favorites` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: UserId,
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: String,
    pub favorited_at: Timestamp,
}

impl Keyed for Favorite {
    fn key(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a favorite, either from a request body or derived from
/// a history row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateFavorite {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: String,
    /// Set by the server; ignored on input.
    #[serde(skip)]
    pub favorited_at: Option<Timestamp>,
}

impl CreateFavorite {
    /// Derive a favorite from a history row, stamped with `now`.
    pub fn from_history(item: &TranslationHistoryItem, now: Timestamp) -> Self {
        Self {
            original_text: item.original_text.clone(),
            translated_text: item.translated_text.clone(),
            source_lang: item.source_lang.clone(),
            target_lang: item.target_lang.clone(),
            tone: item.tone.clone(),
            favorited_at: Some(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[test]
    fn favorite_from_history_copies_content_with_new_timestamp() {
        let translated_at = Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap();
        let item = TranslationHistoryItem {
            id: 7,
            user_id: "user-1".into(),
            original_text: "Hello, how are you?".into(),
            translated_text: "¿Hola, cómo estás?".into(),
            source_lang: "en".into(),
            target_lang: "es".into(),
            tone: "casual".into(),
            timestamp: translated_at,
        };
        let now = translated_at + Duration::hours(3);

        let favorite = CreateFavorite::from_history(&item, now);

        assert_eq!(favorite.original_text, item.original_text);
        assert_eq!(favorite.translated_text, item.translated_text);
        assert_eq!(favorite.source_lang, item.source_lang);
        assert_eq!(favorite.target_lang, item.target_lang);
        assert_eq!(favorite.tone, item.tone);
        assert_eq!(favorite.favorited_at, Some(now));
        assert_ne!(favorite.favorited_at, Some(item.timestamp));
    }
}
