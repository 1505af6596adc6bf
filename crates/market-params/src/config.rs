//! Configuration for financial parameter requests

use crate::error::{MarketParamsError, Result};
use serde::{Deserialize, Serialize};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Market benchmark used for beta and comparison stats
pub const DEFAULT_BENCHMARK: &str = "S&P 500";

/// Configuration for the financial parameters adapter
///
/// Credentials are not part of this struct; they belong to the provider the
/// adapter is constructed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Model identifier passed to the provider
    pub model: String,

    /// Market benchmark named in the prompt
    pub benchmark: String,

    /// Optional sampling temperature
    pub temperature: Option<f32>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            benchmark: DEFAULT_BENCHMARK.to_string(),
            temperature: None,
        }
    }
}

impl AdapterConfig {
    /// Create a new configuration builder
    pub fn builder() -> AdapterConfigBuilder {
        AdapterConfigBuilder::default()
    }

    /// Load configuration from environment
    ///
    /// Reads `GEMINI_MODEL` and `MARKET_BENCHMARK`; both fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(MarketParamsError::Config(
                "model must not be empty".to_string(),
            ));
        }

        if self.benchmark.trim().is_empty() {
            return Err(MarketParamsError::Config(
                "benchmark must not be empty".to_string(),
            ));
        }

        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(MarketParamsError::Config(format!(
                    "temperature must be within 0.0..=2.0, got {t}"
                )));
            }
        }

        Ok(())
    }
}

/// Builder for AdapterConfig
#[derive(Debug, Default)]
pub struct AdapterConfigBuilder {
    model: Option<String>,
    benchmark: Option<String>,
    temperature: Option<f32>,
}

impl AdapterConfigBuilder {
    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the market benchmark name
    pub fn benchmark(mut self, benchmark: impl Into<String>) -> Self {
        self.benchmark = Some(benchmark.into());
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Fill unset fields from `GEMINI_MODEL` and `MARKET_BENCHMARK`
    pub fn with_env(mut self) -> Self {
        if self.model.is_none() {
            self.model = std::env::var("GEMINI_MODEL").ok();
        }
        if self.benchmark.is_none() {
            self.benchmark = std::env::var("MARKET_BENCHMARK").ok();
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AdapterConfig> {
        let defaults = AdapterConfig::default();

        let config = AdapterConfig {
            model: self.model.unwrap_or(defaults.model),
            benchmark: self.benchmark.unwrap_or(defaults.benchmark),
            temperature: self.temperature.or(defaults.temperature),
        };

        config.validate()?;
        Ok(config)
    }
}
