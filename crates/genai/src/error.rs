use linguawise_core::backend::BackendError;

/// Failure talking to the generative-language API.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response had no candidate part of the expected kind.
    #[error("Response contained no {0}")]
    MissingContent(&'static str),

    /// The model's JSON output did not match the expected shape.
    #[error("Malformed model output: {0}")]
    Json(#[from] serde_json::Error),

    /// Inline audio could not be decoded.
    #[error("Invalid audio payload: {0}")]
    Audio(String),
}

impl From<GenAiError> for BackendError {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::Request(e) => BackendError::Transport(e.to_string()),
            GenAiError::HttpStatus { status, body } => BackendError::Status { status, body },
            other => BackendError::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn status_errors_keep_code_and_body() {
        let err: BackendError = GenAiError::HttpStatus {
            status: 429,
            body: "quota".into(),
        }
        .into();

        assert_matches!(err, BackendError::Status { status: 429, ref body } if body == "quota");
    }

    #[test]
    fn content_errors_become_decode_errors() {
        let err: BackendError = GenAiError::MissingContent("text").into();
        assert_matches!(err, BackendError::Decode(msg) if msg.contains("text"));
    }
}
