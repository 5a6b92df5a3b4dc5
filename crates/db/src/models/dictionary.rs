//! Personal dictionary models and DTOs.

use linguawise_core::types::{DbId, Timestamp, UserId};
use linguawise_core::view::Keyed;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dictionary_entries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DictionaryEntry {
    pub id: DbId,
    pub user_id: UserId,
    pub term: String,
    pub translation: String,
    pub context: String,
    pub language: String,
    pub created_at: Timestamp,
}

impl Keyed for DictionaryEntry {
    fn key(&self) -> DbId {
        self.id
    }
}

/// DTO for adding a dictionary term.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDictionaryEntry {
    pub term: String,
    pub translation: String,
    #[serde(default)]
    pub context: String,
    pub language: String,
}
