//! Translation orchestrator.
//!
//! Turns one validated [`TranslationRequest`] into one [`TranslationResult`]
//! by running the backend's `translate` and `suggest` operations
//! concurrently and merging their outputs. Either call failing fails the
//! whole operation: there is no partial result. Speech synthesis and grammar
//! checks are independent single calls exposed on the same type.

use std::sync::Arc;

use crate::backend::{GenerativeBackend, GrammarCall, SuggestCall, TranslateCall};
use crate::error::CoreError;
use crate::translation::{GrammarCheck, SpeechAudio, TranslationRequest, TranslationResult};

/// Tone preference sent when the caller has none.
pub const DEFAULT_TONE_PREFERENCE: &str = "neutral";

pub const TRANSLATION_FAILED_MESSAGE: &str = "An unexpected error occurred during translation.";
pub const SPEECH_FAILED_MESSAGE: &str = "An unexpected error occurred during speech synthesis.";
pub const GRAMMAR_FAILED_MESSAGE: &str = "An unexpected error occurred during grammar check.";

/// Entry point for all generative operations.
///
/// Cheap to clone; the backend is shared behind an `Arc`.
#[derive(Clone)]
pub struct Translator {
    backend: Arc<dyn GenerativeBackend>,
}

impl Translator {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub fn text_model(&self) -> &str {
        self.backend.text_model()
    }

    /// Translate with the default (`neutral`) tone preference.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, CoreError> {
        self.translate_with_preference(request, DEFAULT_TONE_PREFERENCE)
            .await
    }

    /// Run `translate` and `suggest` concurrently and merge the results.
    ///
    /// Fails fast: the first backend error aborts the join and the other
    /// call's outcome is dropped. A translate response without text is
    /// reported as [`CoreError::TranslationEmpty`].
    pub async fn translate_with_preference(
        &self,
        request: &TranslationRequest,
        tone_preference: &str,
    ) -> Result<TranslationResult, CoreError> {
        let translate_call = TranslateCall {
            original_text: request.original_text.clone(),
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
            tone: request.tone,
            tone_preference: tone_preference.to_string(),
        };
        let suggest_call = SuggestCall {
            original_text: request.original_text.clone(),
            source_lang: request.source_lang.clone(),
            target_lang: request.target_lang.clone(),
            tone: request.tone,
        };

        let (translation, suggestions) = tokio::try_join!(
            self.backend.translate(&translate_call),
            self.backend.suggest(&suggest_call),
        )
        .map_err(|e| {
            tracing::error!(
                error = %e,
                source_lang = %request.source_lang,
                target_lang = %request.target_lang,
                tone = %request.tone,
                "Translation backend call failed",
            );
            CoreError::Backend(TRANSLATION_FAILED_MESSAGE.into())
        })?;

        let translated_text = translation
            .translated_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                tracing::error!(
                    source_lang = %request.source_lang,
                    target_lang = %request.target_lang,
                    "Translation backend returned no text",
                );
                CoreError::TranslationEmpty
            })?;

        Ok(TranslationResult {
            translated_text,
            alternatives: suggestions.alternatives,
            cultural_notes: suggestions.cultural_notes,
        })
    }

    /// Synthesize speech for a translated text.
    pub async fn synthesize_speech(&self, text: &str) -> Result<SpeechAudio, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::Validation(
                "text: No text provided for speech synthesis.".into(),
            ));
        }

        let output = self.backend.synthesize_speech(text).await.map_err(|e| {
            tracing::error!(error = %e, chars = text.chars().count(), "Speech backend call failed");
            CoreError::Backend(SPEECH_FAILED_MESSAGE.into())
        })?;

        let media = output
            .media
            .filter(|m| !m.is_empty())
            .ok_or_else(|| CoreError::Synthesis("The backend returned no audio.".into()))?;

        Ok(SpeechAudio { media })
    }

    /// Review a translated text for grammatical errors.
    pub async fn check_grammar(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<GrammarCheck, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::Validation(
                "text: Text is required.".into(),
            ));
        }

        let call = GrammarCall {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };

        self.backend.check_grammar(&call).await.map_err(|e| {
            tracing::error!(error = %e, "Grammar backend call failed");
            CoreError::Backend(GRAMMAR_FAILED_MESSAGE.into())
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
