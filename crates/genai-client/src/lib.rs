//! Structured-output abstraction over generative text services
//!
//! This crate provides the pieces needed to ask a generative model for a JSON
//! document that follows a declared schema:
//!
//! - Request/response types for structured generation
//! - Schema builders for the service's OpenAPI subset
//! - The `StructuredProvider` trait that callers depend on
//! - A Gemini REST provider (behind the `gemini` feature)

pub mod error;
pub mod provider;
pub mod request;
pub mod schema;

pub use error::{GenAiError, Result};
pub use provider::StructuredProvider;
pub use request::{
    FinishReason, StructuredRequest, StructuredRequestBuilder, StructuredResponse, TokenUsage,
    JSON_MIME_TYPE,
};

#[cfg(feature = "gemini")]
pub mod providers;
