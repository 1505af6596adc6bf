//! Errors raised while asking a generative service for structured content

use thiserror::Error;

/// Result type for structured generation calls
pub type Result<T> = std::result::Result<T, GenAiError>;

/// Failure of a structured generation call
///
/// Variants built from an error status keep the service's own message text.
#[derive(Error, Debug)]
pub enum GenAiError {
    /// The service answered with a status that has no more specific variant
    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    /// The service rejected the credentials (missing, invalid or unauthorized key)
    #[error("Credentials rejected by the service: {0}")]
    AuthenticationFailed(String),

    /// Quota exhausted
    #[error("Quota or rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The service refused the prompt or schema
    #[error("Request rejected by the service: {0}")]
    InvalidRequest(String),

    #[error("Model '{model}' not found: {message}")]
    ModelNotFound { model: String, message: String },

    /// Success status, but the body is not a `generateContent` response
    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Connection, timeout or body read failure
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
