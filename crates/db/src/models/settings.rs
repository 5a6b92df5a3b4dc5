//! Per-user translation preferences.

use linguawise_core::language::Tone;
use linguawise_core::types::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_NATIVE_LANGUAGE: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE: &str = "es";

/// A row from the `user_settings` table (timestamps omitted).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserSettings {
    pub user_id: UserId,
    pub native_language: String,
    pub default_target_language: String,
    pub default_tone: String,
    pub save_history: bool,
}

impl UserSettings {
    /// Settings used for a user who has never saved any.
    pub fn defaults_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            native_language: DEFAULT_NATIVE_LANGUAGE.to_string(),
            default_target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            default_tone: Tone::default().as_str().to_string(),
            save_history: true,
        }
    }
}

/// DTO for upserting settings. Only provided fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpsertSettings {
    pub native_language: Option<String>,
    pub default_target_language: Option<String>,
    pub default_tone: Option<Tone>,
    pub save_history: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_new_account_settings() {
        let settings = UserSettings::defaults_for("abc");
        assert_eq!(settings.user_id, "abc");
        assert_eq!(settings.native_language, "en");
        assert_eq!(settings.default_target_language, "es");
        assert_eq!(settings.default_tone, "formal");
        assert!(settings.save_history);
    }
}
