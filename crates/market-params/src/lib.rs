//! Synthetic financial parameters from a generative model
//!
//! This crate asks a generative service for realistic estimates of
//! annualized return, annualized volatility and beta for a list of tickers,
//! plus the benchmark's own stats and the correlation matrix between the
//! requested assets. The response is constrained by a declared JSON schema
//! and parsed into [`FinancialResponse`].
//!
//! The numbers are a best-effort passthrough: nothing checks that the matrix
//! is square, symmetric or bounded. [`FinancialResponse::shape_issues`] can
//! report such problems without rejecting the response.
//!
//! # Example
//!
//! ```rust,no_run
//! use market_params::{AdapterConfig, FinancialParametersAdapter};
//! use genai_client::providers::GeminiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = FinancialParametersAdapter::gemini(
//!         GeminiConfig::from_env(),
//!         AdapterConfig::default(),
//!     )?;
//!
//!     let tickers = vec!["AAPL".to_string(), "MSFT".to_string()];
//!     let params = adapter.fetch_financial_parameters(&tickers).await?;
//!     println!("market return: {}", params.market_stats.annualized_return);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod schema;

// Re-export main types for convenience
pub use adapter::FinancialParametersAdapter;
pub use config::{AdapterConfig, DEFAULT_BENCHMARK, DEFAULT_MODEL};
pub use error::{MarketParamsError, Result};
pub use models::{CorrelationMatrix, FinancialResponse, MarketStat, ShapeIssue, TickerStat};
pub use schema::ResponseSchema;
