//! Command-line interface for fetching synthetic financial parameters
//!
//! # Usage
//!
//! ```bash
//! export API_KEY="your-gemini-key"
//! cargo run --bin market-params -- AAPL MSFT NVDA
//! cargo run --bin market-params -- AAPL,MSFT --benchmark "NASDAQ-100" --json
//! ```

mod table;

use clap::Parser;
use genai_client::providers::GeminiConfig;
use market_params::{AdapterConfig, FinancialParametersAdapter};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "market-params")]
#[command(about = "Estimate return, volatility, beta and correlations for stock tickers", long_about = None)]
struct Args {
    /// Ticker symbols, space or comma separated
    #[arg(required = true, value_delimiter = ',')]
    tickers: Vec<String>,

    /// Model identifier (default: GEMINI_MODEL or gemini-2.5-flash)
    #[arg(short, long)]
    model: Option<String>,

    /// Market benchmark (default: MARKET_BENCHMARK or S&P 500)
    #[arg(short, long)]
    benchmark: Option<String>,

    /// Sampling temperature
    #[arg(short, long)]
    temperature: Option<f32>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the raw response as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn adapter_config(&self) -> market_params::Result<AdapterConfig> {
        let mut builder = AdapterConfig::builder();
        if let Some(model) = &self.model {
            builder = builder.model(model);
        }
        if let Some(benchmark) = &self.benchmark {
            builder = builder.benchmark(benchmark);
        }
        if let Some(t) = self.temperature {
            builder = builder.temperature(t);
        }
        builder.with_env().build()
    }

    fn tickers(&self) -> Vec<String> {
        self.tickers
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        market_utils::init_tracing_json();
    } else {
        market_utils::init_tracing();
    }

    let config = args.adapter_config()?;
    let mut gemini = GeminiConfig::from_env();
    if let Some(secs) = args.timeout {
        gemini = gemini.with_timeout(secs);
    }

    let adapter = FinancialParametersAdapter::gemini(gemini, config)?;
    let tickers = args.tickers();

    info!(?tickers, model = %adapter.config().model, "Fetching financial parameters");
    let params = adapter.fetch_financial_parameters(&tickers).await?;

    for issue in params.shape_issues() {
        warn!(%issue, "Correlation matrix shape issue");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        println!("{}", table::stats_table(&params, &adapter.config().benchmark));
        println!();
        println!("{}", table::correlation_table(&params));
    }

    Ok(())
}
