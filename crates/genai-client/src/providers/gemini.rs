//! Google Gemini provider implementation
//!
//! This module implements the StructuredProvider trait on top of the Gemini
//! `generateContent` REST endpoint with a `responseSchema` constraint.
//! See: https://ai.google.dev/api/generate-content
//!
//! # Example
//!
//! ```no_run
//! use genai_client::providers::{GeminiConfig, GeminiProvider};
//! use genai_client::{StructuredProvider, StructuredRequest, schema};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::with_config(GeminiConfig::new("your-api-key"))?;
//!
//!     let request = StructuredRequest::builder("gemini-2.5-flash")
//!         .prompt("Name one prime number")
//!         .response_schema(schema::object(json!({ "prime": schema::integer() }), &["prime"]))
//!         .build();
//!
//!     let response = provider.generate_structured(request).await?;
//!     println!("{:?}", response.text);
//!     Ok(())
//! }
//! ```

use crate::{
    FinishReason, GenAiError, Result, StructuredProvider, StructuredRequest, StructuredResponse,
    TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    pub api_key: String,

    /// Base URL (default: "https://generativelanguage.googleapis.com/v1beta")
    pub api_base: String,

    /// Request timeout in seconds. None leaves the call unbounded.
    pub timeout_secs: Option<u64>,
}

impl GeminiConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: None,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `API_KEY`, falling back to `GEMINI_API_KEY`.
    /// Optionally reads the base URL from `GEMINI_API_BASE`.
    ///
    /// A missing key is not an error here: the request is sent with an empty
    /// key and the service's rejection surfaces as
    /// [`GenAiError::AuthenticationFailed`].
    pub fn from_env() -> Self {
        let api_key = std::env::var("API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .unwrap_or_else(|_| {
                debug!("No API_KEY or GEMINI_API_KEY set, sending an empty key");
                String::new()
            });

        let api_base = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        Self {
            api_key,
            api_base,
            timeout_secs: None,
        }
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Gemini provider
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with custom configuration
    pub fn with_config(config: GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Create a new Gemini provider with API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GeminiConfig::new(api_key))
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl StructuredProvider for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn generate_structured(&self, request: StructuredRequest) -> Result<StructuredResponse> {
        debug!("Sending request to Gemini API");

        let gemini_request = build_gemini_request(&request);

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(map_error_status(status.as_u16(), &error_text, request.model));
        }

        let body = response.text().await?;
        decode_response(&body)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// ============================================================================
// Gemini-specific request types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

// ============================================================================
// Gemini-specific response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<UsageMetadata>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

// ============================================================================
// Conversion functions
// ============================================================================

fn build_gemini_request(request: &StructuredRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: Some(request.prompt.clone()),
                thought: None,
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: request.response_mime_type.clone(),
            response_schema: request.response_schema.clone(),
            temperature: request.temperature,
        },
    }
}

/// Collect the text of the first candidate
///
/// Text parts are concatenated in order; thought parts are skipped. A response
/// without candidates or text parts yields `text: None`.
fn parse_gemini_response(response: GeminiResponse) -> StructuredResponse {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        debug!("Prompt blocked by Gemini: {}", reason);
    }

    let usage = response.usage_metadata.map(|u| TokenUsage {
        input_tokens: u.prompt_token_count,
        output_tokens: u.candidates_token_count,
    });

    let Some(candidate) = response.candidates.into_iter().next() else {
        debug!("No candidates in Gemini response");
        return StructuredResponse {
            text: None,
            finish_reason: None,
            usage,
        };
    };

    let finish_reason = candidate.finish_reason.as_deref().map(map_finish_reason);

    let texts: Vec<String> = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.thought != Some(true))
        .filter_map(|p| p.text)
        .collect();

    let text = if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    };

    if let Some(usage) = usage {
        debug!(
            "Received response - finish_reason: {:?}, tokens: {}/{}",
            finish_reason, usage.input_tokens, usage.output_tokens
        );
    }

    StructuredResponse {
        text,
        finish_reason,
        usage,
    }
}

fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        "RECITATION" => FinishReason::Recitation,
        _ => {
            debug!("Unknown finish reason: {}", reason);
            FinishReason::Other
        }
    }
}

/// Decode a successful `generateContent` body
fn decode_response(body: &str) -> Result<StructuredResponse> {
    let response: GeminiResponse = serde_json::from_str(body)?;
    Ok(parse_gemini_response(response))
}

/// Map an error status to a GenAiError, preferring the API's own message
fn map_error_status(status: u16, body: &str, model: String) -> GenAiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(ToString::to_string))
        .unwrap_or_else(|| body.to_string());

    match status {
        401 | 403 => GenAiError::AuthenticationFailed(message),
        400 if body.contains("API_KEY_INVALID") => GenAiError::AuthenticationFailed(message),
        400 => GenAiError::InvalidRequest(message),
        404 => GenAiError::ModelNotFound { model, message },
        429 => GenAiError::RateLimitExceeded(message),
        _ => GenAiError::RequestFailed(format!("HTTP {status}: {message}")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> StructuredRequest {
        StructuredRequest::builder("gemini-2.5-flash")
            .prompt("Estimate parameters for AAPL")
            .response_schema(json!({"type": "OBJECT"}))
            .build()
    }

    #[test]
    fn test_provider_creation() {
        let provider = GeminiProvider::new("test-key").unwrap();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.config().api_key, "test-key");
        assert_eq!(provider.config().api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(provider.config().timeout_secs, None);
    }

    #[test]
    fn test_custom_config() {
        let config = GeminiConfig::new("test-key")
            .with_api_base("http://localhost:8080/v1beta/")
            .with_timeout(30);
        let provider = GeminiProvider::with_config(config).unwrap();

        assert_eq!(provider.config().timeout_secs, Some(30));
        assert_eq!(
            provider.endpoint("gemini-2.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_config_from_env() {
        unsafe {
            std::env::remove_var("API_KEY");
            std::env::remove_var("GEMINI_API_KEY");
        }
        let config = GeminiConfig::from_env();
        assert_eq!(config.api_key, "");
        assert!(GeminiProvider::with_config(config).is_ok());

        unsafe {
            std::env::set_var("GEMINI_API_KEY", "fallback-key");
        }
        assert_eq!(GeminiConfig::from_env().api_key, "fallback-key");

        unsafe {
            std::env::set_var("API_KEY", "primary-key");
        }
        assert_eq!(GeminiConfig::from_env().api_key, "primary-key");

        unsafe {
            std::env::remove_var("API_KEY");
            std::env::remove_var("GEMINI_API_KEY");
        }
    }

    #[test]
    fn test_request_serialization() {
        let body = serde_json::to_value(build_gemini_request(&sample_request())).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "Estimate parameters for AAPL" }],
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "OBJECT" },
                },
            })
        );
    }

    #[test]
    fn test_response_text_concatenation() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "thinking...", "thought": true },
                        { "text": "{\"a\":" },
                        { "text": "1}" },
                    ],
                },
                "finishReason": "STOP",
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 5 },
        }))
        .unwrap();

        let parsed = parse_gemini_response(response);
        assert_eq!(parsed.text.as_deref(), Some("{\"a\":1}"));
        assert_eq!(parsed.finish_reason, Some(FinishReason::Stop));
        assert_eq!(parsed.usage.map(|u| u.total()), Some(17));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" },
        }))
        .unwrap();

        let parsed = parse_gemini_response(response);
        assert!(parsed.text.is_none());
        assert!(parsed.finish_reason.is_none());
    }

    #[test]
    fn test_decode_response() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{}"}]},"finishReason":"STOP"}]}"#;
        let parsed = decode_response(body).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("{}"));

        let err = decode_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GenAiError::MalformedResponse(_)));
    }

    #[test]
    fn test_finish_reason_mapping() {
        assert_eq!(map_finish_reason("STOP"), FinishReason::Stop);
        assert_eq!(map_finish_reason("MAX_TOKENS"), FinishReason::MaxTokens);
        assert_eq!(map_finish_reason("SAFETY"), FinishReason::Safety);
        assert_eq!(map_finish_reason("RECITATION"), FinishReason::Recitation);
        assert_eq!(map_finish_reason("BLOCKLIST"), FinishReason::Other);
    }

    #[test]
    fn test_error_status_mapping() {
        let invalid_key = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","details":[{"reason":"API_KEY_INVALID"}]}}"#;
        let err = map_error_status(400, invalid_key, "m".to_string());
        assert!(matches!(err, GenAiError::AuthenticationFailed(_)));
        assert!(err.to_string().contains("API key not valid"));

        let bad_schema = r#"{"error":{"code":400,"message":"Invalid JSON payload"}}"#;
        match map_error_status(400, bad_schema, "m".to_string()) {
            GenAiError::InvalidRequest(msg) => assert_eq!(msg, "Invalid JSON payload"),
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }

        let denied = r#"{"error":{"code":403,"message":"Method doesn't allow unregistered callers."}}"#;
        assert!(matches!(
            map_error_status(403, denied, "m".to_string()),
            GenAiError::AuthenticationFailed(m) if m == "Method doesn't allow unregistered callers."
        ));

        let missing = r#"{"error":{"code":404,"message":"models/gemini-0 is not found for API version v1beta"}}"#;
        let err = map_error_status(404, missing, "gemini-0".to_string());
        assert!(matches!(
            &err,
            GenAiError::ModelNotFound { model, message }
                if model == "gemini-0" && message.starts_with("models/gemini-0 is not found")
        ));
        assert!(err.to_string().contains("is not found for API version"));
        assert!(matches!(
            map_error_status(429, "quota", "m".to_string()),
            GenAiError::RateLimitExceeded(m) if m == "quota"
        ));
        assert!(matches!(
            map_error_status(503, "overloaded", "m".to_string()),
            GenAiError::RequestFailed(m) if m == "HTTP 503: overloaded"
        ));
    }

    #[test]
    fn test_transport_error_is_propagated() {
        let config = GeminiConfig::new("test-key")
            .with_api_base("http://127.0.0.1:1/v1beta")
            .with_timeout(5);
        let provider = GeminiProvider::with_config(config).unwrap();

        let result = tokio_test::block_on(provider.generate_structured(sample_request()));
        assert!(matches!(result, Err(GenAiError::HttpError(_))));
    }
}
