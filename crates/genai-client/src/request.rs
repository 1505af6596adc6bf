//! Structured generation request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MIME type asking the service to answer with a JSON document
pub const JSON_MIME_TYPE: &str = "application/json";

/// Request for schema-constrained generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredRequest {
    /// Model identifier (provider-specific)
    pub model: String,

    /// Natural-language prompt
    pub prompt: String,

    /// Schema the response must follow
    pub response_schema: Value,

    /// Response MIME type (default: "application/json")
    pub response_mime_type: String,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response from structured generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredResponse {
    /// Generated text, absent when the service produced nothing
    pub text: Option<String>,

    /// Why generation stopped, when reported
    pub finish_reason: Option<FinishReason>,

    /// Token usage, when reported
    pub usage: Option<TokenUsage>,
}

impl StructuredResponse {
    /// Create a response carrying only text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a response without any text
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text if present and non-empty
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,

    /// Hit the output token limit
    MaxTokens,

    /// Blocked by safety filters
    Safety,

    /// Blocked for reciting training data
    Recitation,

    /// Anything else the service reports
    Other,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub input_tokens: usize,

    /// Number of generated tokens
    pub output_tokens: usize,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> usize {
        self.input_tokens + self.output_tokens
    }
}

impl StructuredRequest {
    /// Create a builder for structured requests
    pub fn builder(model: impl Into<String>) -> StructuredRequestBuilder {
        StructuredRequestBuilder::new(model)
    }
}

/// Builder for StructuredRequest
pub struct StructuredRequestBuilder {
    model: String,
    prompt: String,
    response_schema: Value,
    response_mime_type: String,
    temperature: Option<f32>,
}

impl StructuredRequestBuilder {
    /// Create a new builder
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: String::new(),
            response_schema: Value::Null,
            response_mime_type: JSON_MIME_TYPE.to_string(),
            temperature: None,
        }
    }

    /// Set the prompt text
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the response schema
    pub fn response_schema(mut self, schema: Value) -> Self {
        self.response_schema = schema;
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Build the request
    pub fn build(self) -> StructuredRequest {
        StructuredRequest {
            model: self.model,
            prompt: self.prompt,
            response_schema: self.response_schema,
            response_mime_type: self.response_mime_type,
            temperature: self.temperature,
        }
    }
}
