//! Prompt template for financial parameter requests

use crate::error::Result;
use minijinja::{Environment, context};

const FINANCIAL_PARAMETERS_TEMPLATE: &str = "\
Generate realistic estimated financial parameters for the following stock tickers \
based on their 1-year historical performance up to today: {{ tickers | join(\", \") }}.

Also provide the stats for the Market Benchmark ({{ benchmark }}).

I need:
1. Annualized Expected Return (decimal).
2. Annualized Volatility (decimal).
3. Beta (relative to {{ benchmark }}).
4. The Correlation Matrix between the requested assets.

Be precise and realistic.";

/// Render the request prompt
///
/// Tickers are embedded comma separated in input order. The list is not
/// validated; an empty list still renders.
pub fn build_prompt(tickers: &[String], benchmark: &str) -> Result<String> {
    let env = Environment::new();
    let prompt = env.render_str(
        FINANCIAL_PARAMETERS_TEMPLATE,
        context! { tickers => tickers, benchmark => benchmark },
    )?;
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tickers(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_tickers_in_input_order() {
        let prompt = build_prompt(&tickers(&["MSFT", "AAPL", "NVDA"]), "S&P 500").unwrap();
        assert!(prompt.contains("up to today: MSFT, AAPL, NVDA."));
    }

    #[test]
    fn test_single_ticker() {
        let prompt = build_prompt(&tickers(&["TSLA"]), "S&P 500").unwrap();
        assert!(prompt.contains("up to today: TSLA."));
    }

    #[test]
    fn test_benchmark_is_not_escaped() {
        let prompt = build_prompt(&tickers(&["AAPL"]), "S&P 500").unwrap();
        assert!(prompt.contains("Market Benchmark (S&P 500)"));
        assert!(prompt.contains("Beta (relative to S&P 500)"));
    }

    #[test]
    fn test_requests_every_statistic() {
        let prompt = build_prompt(&tickers(&["AAPL"]), "S&P 500").unwrap();
        assert!(prompt.contains("Annualized Expected Return"));
        assert!(prompt.contains("Annualized Volatility"));
        assert!(prompt.contains("Correlation Matrix"));
    }

    #[test]
    fn test_empty_ticker_list_still_renders() {
        let prompt = build_prompt(&[], "S&P 500").unwrap();
        assert!(prompt.contains("up to today: ."));
    }
}
