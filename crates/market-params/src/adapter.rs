//! Financial parameters adapter
//!
//! Builds the prompt and response schema, calls the generative service once,
//! and parses the returned text into a [`FinancialResponse`]. Every failure is
//! logged once and returned to the caller; nothing is retried or cached.

use crate::config::AdapterConfig;
use crate::error::{MarketParamsError, Result};
use crate::models::FinancialResponse;
use crate::prompt::build_prompt;
use crate::schema::ResponseSchema;
use genai_client::providers::{GeminiConfig, GeminiProvider};
use genai_client::{StructuredProvider, StructuredRequest};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Adapter that turns a ticker list into synthetic financial parameters
///
/// The provider is injected, so tests can substitute a mock and callers can
/// share one client across adapters.
pub struct FinancialParametersAdapter<P: StructuredProvider + ?Sized> {
    provider: Arc<P>,
    config: AdapterConfig,
}

impl<P: StructuredProvider + ?Sized> FinancialParametersAdapter<P> {
    /// Create an adapter around an existing provider
    pub fn new(provider: Arc<P>, config: AdapterConfig) -> Self {
        Self { provider, config }
    }

    /// Get the adapter configuration
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Build the request sent for `tickers`
    pub fn build_request(&self, tickers: &[String]) -> Result<StructuredRequest> {
        let prompt = build_prompt(tickers, &self.config.benchmark)?;

        let mut builder = StructuredRequest::builder(&self.config.model)
            .prompt(prompt)
            .response_schema(FinancialResponse::response_schema());
        if let Some(t) = self.config.temperature {
            builder = builder.temperature(t);
        }

        Ok(builder.build())
    }

    /// Fetch estimated return, volatility, beta and correlations for `tickers`
    ///
    /// # Errors
    ///
    /// - [`MarketParamsError::Provider`] when the service call fails
    /// - [`MarketParamsError::NoData`] when the service returns no text
    /// - [`MarketParamsError::Parse`] when the text is not a valid document
    #[instrument(skip(self), fields(model = %self.config.model))]
    pub async fn fetch_financial_parameters(&self, tickers: &[String]) -> Result<FinancialResponse> {
        let result = self.request_and_parse(tickers).await;

        if let Err(e) = &result {
            error!(error = %e, "Financial parameters request failed");
        }

        result
    }

    async fn request_and_parse(&self, tickers: &[String]) -> Result<FinancialResponse> {
        let request = self.build_request(tickers)?;

        let response = self.provider.generate_structured(request).await?;

        let text = response.non_empty_text().ok_or(MarketParamsError::NoData)?;
        debug!(bytes = text.len(), "Parsing financial parameters");

        Ok(serde_json::from_str(text)?)
    }
}

impl FinancialParametersAdapter<GeminiProvider> {
    /// Create an adapter backed by the Gemini provider
    pub fn gemini(gemini: GeminiConfig, config: AdapterConfig) -> Result<Self> {
        config.validate()?;
        let provider = GeminiProvider::with_config(gemini)?;
        Ok(Self::new(Arc::new(provider), config))
    }

    /// Create a Gemini-backed adapter from environment variables
    ///
    /// See [`GeminiConfig::from_env`] and [`AdapterConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::gemini(GeminiConfig::from_env(), AdapterConfig::from_env()?)
    }
}
