pub mod catalog;
pub mod dictionary;
pub mod favorites;
pub mod history;
pub mod settings;
pub mod statistics;
pub mod translation;

use linguawise_core::error::CoreError;

/// Reject a blank required string field with a `field: message` validation
/// error.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field}: must not be empty")));
    }
    Ok(())
}
