use async_trait::async_trait;
use linguawise_core::backend::{
    BackendError, GenerativeBackend, GrammarCall, SpeechOutput, SuggestCall, SuggestOutput,
    TranslateCall, TranslateOutput,
};
use linguawise_core::translation::GrammarCheck;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::audio;
use crate::config::GenAiConfig;
use crate::error::GenAiError;
use crate::prompt;

/// Prebuilt voice used for speech synthesis.
const SPEECH_VOICE: &str = "Algenib";

// ---------------------------------------------------------------------------
// GenAiClient
// ---------------------------------------------------------------------------

/// HTTP client for the generative-language API.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GenAiClient {
    /// Create a client whose requests time out after `config.timeout`.
    pub fn new(config: GenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// POST a `generateContent` request and return the decoded response body.
    async fn generate(&self, model: &str, body: &Value) -> Result<Value, GenAiError> {
        tracing::debug!(model, "Calling generative API");

        let response = self
            .client
            .post(self.config.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Run a JSON-mode prompt against the text model and decode its output.
    async fn generate_json<T: DeserializeOwned>(&self, prompt: String) -> Result<T, GenAiError> {
        let response = self
            .generate(&self.config.text_model, &json_request(&prompt))
            .await?;
        let text = extract_text(&response)?;
        Ok(serde_json::from_str(strip_code_fence(text))?)
    }
}

#[async_trait]
impl GenerativeBackend for GenAiClient {
    async fn translate(&self, call: &TranslateCall) -> Result<TranslateOutput, BackendError> {
        Ok(self.generate_json(prompt::translate(call)).await?)
    }

    async fn suggest(&self, call: &SuggestCall) -> Result<SuggestOutput, BackendError> {
        Ok(self.generate_json(prompt::suggest(call)).await?)
    }

    async fn synthesize_speech(&self, text: &str) -> Result<SpeechOutput, BackendError> {
        let response = self
            .generate(&self.config.speech_model, &speech_request(text))
            .await?;

        let media = match extract_inline_audio(&response) {
            Some((mime_type, data)) => Some(audio::to_data_uri(mime_type, data)?),
            None => None,
        };
        Ok(SpeechOutput { media })
    }

    async fn check_grammar(&self, call: &GrammarCall) -> Result<GrammarCheck, BackendError> {
        Ok(self.generate_json(prompt::grammar(call)).await?)
    }

    fn text_model(&self) -> &str {
        &self.config.text_model
    }
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

fn json_request(prompt: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" },
    })
}

fn speech_request(text: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": text }] }],
        "generationConfig": {
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": SPEECH_VOICE } }
            },
        },
    })
}

// ---------------------------------------------------------------------------
// Response extraction
// ---------------------------------------------------------------------------

fn extract_text(response: &Value) -> Result<&str, GenAiError> {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or(GenAiError::MissingContent("text"))
}

/// First inline-data part as `(mime_type, base64_data)`.
fn extract_inline_audio(response: &Value) -> Option<(&str, &str)> {
    let part = response.pointer("/candidates/0/content/parts/0/inlineData")?;
    let mime_type = part.get("mimeType").and_then(Value::as_str)?;
    let data = part.get("data").and_then(Value::as_str)?;
    (!data.is_empty()).then_some((mime_type, data))
}

/// Some models wrap JSON output in a Markdown code fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}
