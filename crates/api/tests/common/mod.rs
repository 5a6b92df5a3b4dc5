#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use linguawise_core::backend::{
    BackendError, GenerativeBackend, GrammarCall, SpeechOutput, SuggestCall, SuggestOutput,
    TranslateCall, TranslateOutput,
};
use linguawise_core::orchestrator::Translator;
use linguawise_core::translation::GrammarCheck;
use sqlx::PgPool;
use tower::ServiceExt;

use linguawise_api::auth::jwt::{issue_token, JwtConfig};
use linguawise_api::config::ServerConfig;
use linguawise_api::router::build_app_router;
use linguawise_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9002".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Stub backend
// ---------------------------------------------------------------------------

pub const STUB_TEXT_MODEL: &str = "stub-text-model";

/// Canned generative backend. Translates by prefixing the target code.
#[derive(Debug, Clone, Default)]
pub struct StubBackend {
    /// Return an empty translation.
    pub empty_translation: bool,
    /// Fail every call with a transport error.
    pub fail: bool,
    /// Answer speech requests without audio.
    pub no_audio: bool,
}

impl StubBackend {
    fn check(&self) -> Result<(), BackendError> {
        if self.fail {
            return Err(BackendError::Transport("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl GenerativeBackend for StubBackend {
    async fn translate(&self, call: &TranslateCall) -> Result<TranslateOutput, BackendError> {
        self.check()?;
        let text = if self.empty_translation {
            String::new()
        } else {
            format!("[{}] {}", call.target_lang, call.original_text)
        };
        Ok(TranslateOutput {
            translated_text: Some(text),
        })
    }

    async fn suggest(&self, _call: &SuggestCall) -> Result<SuggestOutput, BackendError> {
        self.check()?;
        Ok(SuggestOutput {
            suggestions: vec![],
            alternatives: vec!["alt one".into(), "alt two".into()],
            cultural_notes: "Common greeting.".into(),
        })
    }

    async fn synthesize_speech(&self, _text: &str) -> Result<SpeechOutput, BackendError> {
        self.check()?;
        let media = (!self.no_audio).then(|| "data:audio/wav;base64,UklGRg==".to_string());
        Ok(SpeechOutput { media })
    }

    async fn check_grammar(&self, call: &GrammarCall) -> Result<GrammarCheck, BackendError> {
        self.check()?;
        Ok(GrammarCheck {
            corrected_text: call.text.clone(),
            suggestions: vec!["Looks good.".into()],
        })
    }

    fn text_model(&self) -> &str {
        STUB_TEXT_MODEL
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with the default stub backend.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubBackend::default())
}

/// Build the full application router around the given backend, with the
/// same middleware stack production uses.
pub fn build_test_app_with(pool: PgPool, backend: StubBackend) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        translator: Translator::new(Arc::new(backend)),
    };
    build_app_router(state, &config)
}

/// A valid bearer token for `user_id`.
pub fn token_for(user_id: &str) -> String {
    let config = JwtConfig {
        secret: TEST_SECRET.to_string(),
    };
    issue_token(user_id, Some(&format!("{user_id}@example.com")), 900, &config)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
