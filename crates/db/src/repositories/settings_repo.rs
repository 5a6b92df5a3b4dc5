//! Repository for the `user_settings` table.

use linguawise_core::language::Tone;
use sqlx::PgPool;

use crate::models::settings::{UpsertSettings, UserSettings};

const COLUMNS: &str = "user_id, native_language, default_target_language, default_tone, \
                       save_history";

/// Provides data access for per-user settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Get the user's settings, if they have ever been saved.
    pub async fn find(pool: &PgPool, user_id: &str) -> Result<Option<UserSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_settings WHERE user_id = $1");
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Get the user's settings, falling back to defaults when none are stored.
    pub async fn get_or_default(pool: &PgPool, user_id: &str) -> Result<UserSettings, sqlx::Error> {
        Ok(Self::find(pool, user_id)
            .await?
            .unwrap_or_else(|| UserSettings::defaults_for(user_id)))
    }

    /// Insert or merge the user's settings.
    ///
    /// Uses `ON CONFLICT (user_id) DO UPDATE` so only provided fields are
    /// changed; a first write fills the rest from [`UserSettings::defaults_for`].
    pub async fn upsert(
        pool: &PgPool,
        user_id: &str,
        dto: &UpsertSettings,
    ) -> Result<UserSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_settings
                 (user_id, native_language, default_target_language, default_tone, save_history)
             VALUES ($1, COALESCE($2, $6), COALESCE($3, $7), COALESCE($4, $8),
                     COALESCE($5, $9))
             ON CONFLICT (user_id) DO UPDATE SET
                 native_language = COALESCE($2, user_settings.native_language),
                 default_target_language = COALESCE($3, user_settings.default_target_language),
                 default_tone = COALESCE($4, user_settings.default_tone),
                 save_history = COALESCE($5, user_settings.save_history),
                 updated_at = now()
             RETURNING {COLUMNS}"
        );
        let defaults = UserSettings::defaults_for(user_id);
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .bind(&dto.native_language)
            .bind(&dto.default_target_language)
            .bind(dto.default_tone.map(Tone::as_str))
            .bind(dto.save_history)
            .bind(&defaults.native_language)
            .bind(&defaults.default_target_language)
            .bind(&defaults.default_tone)
            .bind(defaults.save_history)
            .fetch_one(pool)
            .await
    }
}
