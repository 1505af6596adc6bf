//! Error types for financial parameter requests

use genai_client::GenAiError;
use thiserror::Error;

/// Errors returned by the financial parameters adapter
#[derive(Debug, Error)]
pub enum MarketParamsError {
    /// The generative service call failed (network, authentication, quota)
    #[error("Generative service error: {0}")]
    Provider(#[from] GenAiError),

    /// The service answered without any text
    #[error("No data returned from the generative service")]
    NoData,

    /// The returned text is not a valid financial parameters document
    #[error("Failed to parse financial parameters: {0}")]
    Parse(#[from] serde_json::Error),

    /// Prompt template failed to render
    #[error("Failed to render prompt: {0}")]
    Prompt(#[from] minijinja::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for financial parameter operations
pub type Result<T> = std::result::Result<T, MarketParamsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MarketParamsError::NoData.to_string(),
            "No data returned from the generative service"
        );

        let err = MarketParamsError::Config("model must not be empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: model must not be empty");
    }

    #[test]
    fn test_provider_error_keeps_message() {
        let err: MarketParamsError =
            GenAiError::RateLimitExceeded("quota exhausted".to_string()).into();

        assert!(err.to_string().contains("Quota or rate limit exceeded: quota exhausted"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
