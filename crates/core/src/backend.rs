//! Contract for the hosted generative-language backend.
//!
//! The backend performs the actual translation, suggestion, speech and
//! grammar work. Implementations live outside `core` (see the `genai`
//! crate); the orchestrator only ever sees `Arc<dyn GenerativeBackend>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::language::Tone;
use crate::translation::GrammarCheck;

// ---------------------------------------------------------------------------
// Calls
// ---------------------------------------------------------------------------

/// Input to the `translate` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateCall {
    pub original_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: Tone,
    /// The user's general tone preference, blended into the prompt.
    pub tone_preference: String,
}

/// Input to the `suggest` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestCall {
    pub original_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub tone: Tone,
}

/// Input to the `check_grammar` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarCall {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Output of `translate`. The text may be absent when the model returns a
/// partial object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOutput {
    #[serde(default)]
    pub translated_text: Option<String>,
}

/// Output of `suggest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestOutput {
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub cultural_notes: String,
}

/// Output of `synthesize_speech`: a `data:` URI, or `None` when the backend
/// answered without audio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechOutput {
    pub media: Option<String>,
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (network, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn translate(&self, call: &TranslateCall) -> Result<TranslateOutput, BackendError>;

    async fn suggest(&self, call: &SuggestCall) -> Result<SuggestOutput, BackendError>;

    async fn synthesize_speech(&self, text: &str) -> Result<SpeechOutput, BackendError>;

    async fn check_grammar(&self, call: &GrammarCall) -> Result<GrammarCheck, BackendError>;

    /// Model serving the text operations, reported by health checks.
    fn text_model(&self) -> &str {
        "unknown"
    }
}
