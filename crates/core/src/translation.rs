//! Translation request/response value types and form validation.
//!
//! The HTTP layer deserializes raw form input into [`TranslateForm`] (every
//! field optional so missing fields produce a validation message instead of a
//! deserialization failure) and converts it into an immutable
//! [`TranslationRequest`] before anything is sent to the backend.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::language::Tone;

/// Maximum number of characters accepted for a single translation. Mirrored
/// in the `length` validator on [`TranslateForm::original_text`].
pub const MAX_TEXT_CHARS: usize = 5000;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw translation form as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TranslateForm {
    #[validate(
        required(message = "Text is required."),
        length(min = 1, max = 5000, message = "Text must be between 1 and 5000 characters.")
    )]
    pub original_text: Option<String>,

    #[validate(
        required(message = "Source language is required."),
        length(min = 1, max = 16, message = "Source language is required.")
    )]
    pub source_lang: Option<String>,

    #[validate(
        required(message = "Target language is required."),
        length(min = 1, max = 16, message = "Target language is required.")
    )]
    pub target_lang: Option<String>,

    #[validate(required(message = "Tone is required."))]
    pub tone: Option<String>,
}

/// A validated translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    pub original_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: Tone,
}

impl TranslateForm {
    /// Validate the form and convert it into a [`TranslationRequest`].
    pub fn into_request(self) -> Result<TranslationRequest, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(describe_errors(&e)))?;

        // `validate` guarantees presence; the defaults are never observed.
        let original_text = self.original_text.unwrap_or_default();
        if original_text.trim().is_empty() {
            return Err(CoreError::Validation(
                "original_text: Text is required.".into(),
            ));
        }

        let tone: Tone = self.tone.unwrap_or_default().parse()?;

        Ok(TranslationRequest {
            original_text,
            source_lang: self.source_lang.unwrap_or_default(),
            target_lang: self.target_lang.unwrap_or_default(),
            tone,
        })
    }
}

/// Flatten validator errors into a single `field: message` string, fields
/// sorted by name so the output is stable.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {message}")
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Consolidated result of one orchestrated translation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub alternatives: Vec<String>,
    pub cultural_notes: String,
}

/// Encoded audio for a translated text, as a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechAudio {
    pub media: String,
}

/// Grammar review of a translated text. Decoded from the backend's
/// camelCase output, served to clients in snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct GrammarCheck {
    pub corrected_text: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
