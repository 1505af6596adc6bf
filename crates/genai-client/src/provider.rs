//! Structured generation provider trait

use crate::{Result, StructuredRequest, StructuredResponse};
use async_trait::async_trait;

/// Trait for services that generate schema-constrained content
///
/// The only capability callers rely on is "generate structured content from a
/// prompt and a schema". Implementations own their transport and credentials.
#[async_trait]
pub trait StructuredProvider: Send + Sync {
    /// Generate content for the request
    ///
    /// # Arguments
    ///
    /// * `request` - Model, prompt and response schema
    ///
    /// # Returns
    ///
    /// The raw response text (if any) with finish metadata. The text is not
    /// parsed or checked against the schema here.
    async fn generate_structured(&self, request: StructuredRequest) -> Result<StructuredResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &'static str;
}
