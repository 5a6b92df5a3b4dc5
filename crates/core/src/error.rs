use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The translate call succeeded but produced no usable text.
    #[error("Translation returned no text")]
    TranslationEmpty,

    /// A generative backend call failed. Carries the user-facing message only;
    /// the underlying cause is logged where the failure is observed.
    #[error("Backend call failed: {0}")]
    Backend(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
}
