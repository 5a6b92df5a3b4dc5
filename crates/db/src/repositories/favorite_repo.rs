//! Repository for the `favorites` table.

use linguawise_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{CreateFavorite, Favorite};

const COLUMNS: &str = "id, user_id, original_text, translated_text, source_lang, target_lang, \
                       tone, favorited_at";

/// Provides data access for favorite translations.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite. `favorited_at` defaults to the database clock when
    /// the DTO does not carry one.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateFavorite,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites
                 (user_id, original_text, translated_text, source_lang, target_lang, tone,
                  favorited_at)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, now()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(&input.original_text)
            .bind(&input.translated_text)
            .bind(&input.source_lang)
            .bind(&input.target_lang)
            .bind(&input.tone)
            .bind(input.favorited_at)
            .fetch_one(pool)
            .await
    }

    /// List the user's favorites, most recently favorited first, optionally
    /// filtered by an `ILIKE` pattern on the original or translated text.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR original_text ILIKE $2 OR translated_text ILIKE $2)
             ORDER BY favorited_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete one of the user's favorites. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
