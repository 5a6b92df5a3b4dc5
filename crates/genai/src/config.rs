use std::time::Duration;

/// Connection settings for the generative-language API.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// Base URL up to and including the API version segment.
    pub base_url: String,
    /// Model used for translation, suggestions and grammar checks.
    pub text_model: String,
    /// Model used for text-to-speech.
    pub speech_model: String,
    /// Timeout applied to every outbound request.
    pub timeout: Duration,
}

impl GenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default                                            |
    /// |----------------------|----------------------------------------------------|
    /// | `GENAI_API_KEY`      | (required)                                         |
    /// | `GENAI_BASE_URL`     | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `GENAI_TEXT_MODEL`   | `gemini-2.0-flash`                                 |
    /// | `GENAI_SPEECH_MODEL` | `gemini-2.5-flash-preview-tts`                     |
    /// | `GENAI_TIMEOUT_SECS` | `60`                                               |
    ///
    /// # Panics
    ///
    /// Panics if `GENAI_API_KEY` is unset or `GENAI_TIMEOUT_SECS` is not a
    /// valid integer.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GENAI_API_KEY").expect("GENAI_API_KEY must be set");

        let base_url = std::env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());

        let text_model =
            std::env::var("GENAI_TEXT_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".into());

        let speech_model = std::env::var("GENAI_SPEECH_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-preview-tts".into());

        let timeout_secs: u64 = std::env::var("GENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("GENAI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            text_model,
            speech_model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Full `generateContent` URL for `model`.
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}
