//! Repository for the `dictionary_entries` table.

use linguawise_core::types::DbId;
use sqlx::PgPool;

use crate::models::dictionary::{CreateDictionaryEntry, DictionaryEntry};

const COLUMNS: &str = "id, user_id, term, translation, context, language, created_at";

/// Provides data access for the personal dictionary.
pub struct DictionaryRepo;

impl DictionaryRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateDictionaryEntry,
    ) -> Result<DictionaryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO dictionary_entries (user_id, term, translation, context, language)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DictionaryEntry>(&query)
            .bind(user_id)
            .bind(&input.term)
            .bind(&input.translation)
            .bind(&input.context)
            .bind(&input.language)
            .fetch_one(pool)
            .await
    }

    /// List the user's terms, newest first, optionally filtered by an
    /// `ILIKE` pattern over term and translation.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DictionaryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dictionary_entries
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR term ILIKE $2 OR translation ILIKE $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, DictionaryEntry>(&query)
            .bind(user_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of terms the user has saved.
    pub async fn count_for_user(pool: &PgPool, user_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM dictionary_entries WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Delete one of the user's terms. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dictionary_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
