//! Client for the hosted generative-language API.
//!
//! [`GenAiClient`] implements [`linguawise_core::backend::GenerativeBackend`]
//! against a Gemini-style `generateContent` endpoint: JSON-mode prompts for
//! translation, suggestions and grammar checks, and audio output for speech.

pub mod audio;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::GenAiClient;
pub use config::GenAiConfig;
pub use error::GenAiError;
