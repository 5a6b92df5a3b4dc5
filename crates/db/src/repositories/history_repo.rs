//! Repository for the `translation_history` table.

use linguawise_core::types::DbId;
use sqlx::PgPool;

use crate::models::history::{CreateHistoryItem, TranslationHistoryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, original_text, translated_text, source_lang, target_lang, \
                       tone, translated_at";

/// Provides data access for translation history.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Insert a history row for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateHistoryItem,
    ) -> Result<TranslationHistoryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO translation_history
                 (user_id, original_text, translated_text, source_lang, target_lang, tone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationHistoryItem>(&query)
            .bind(user_id)
            .bind(&input.original_text)
            .bind(&input.translated_text)
            .bind(&input.source_lang)
            .bind(&input.target_lang)
            .bind(&input.tone)
            .fetch_one(pool)
            .await
    }

    /// Find one of the user's history rows by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: &str,
        id: DbId,
    ) -> Result<Option<TranslationHistoryItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM translation_history WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, TranslationHistoryItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's history, newest first.
    ///
    /// `pattern` is an `ILIKE` pattern matched against the original and the
    /// translated text; `None` lists everything.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TranslationHistoryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translation_history
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR original_text ILIKE $2 OR translated_text ILIKE $2)
             ORDER BY translated_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, TranslationHistoryItem>(&query)
            .bind(user_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Every history row for the user, newest first. Used for statistics.
    pub async fn list_all_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<TranslationHistoryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translation_history
             WHERE user_id = $1
             ORDER BY translated_at DESC, id DESC"
        );
        sqlx::query_as::<_, TranslationHistoryItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete one of the user's history rows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM translation_history WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all of the user's history. Returns the number of rows removed.
    pub async fn delete_all_for_user(pool: &PgPool, user_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM translation_history WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
