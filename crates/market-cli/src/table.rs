//! Table rendering for financial parameters

use comfy_table::{Table, presets::UTF8_FULL};
use market_params::FinancialResponse;

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Per-ticker stats followed by the benchmark row
pub fn stats_table(params: &FinancialResponse, benchmark: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Ticker", "Exp. Return", "Volatility", "Beta"]);

    for stat in &params.stats {
        table.add_row(vec![
            stat.ticker.clone(),
            percent(stat.annualized_return),
            percent(stat.annualized_volatility),
            format!("{:.2}", stat.beta),
        ]);
    }

    table.add_row(vec![
        benchmark.to_string(),
        percent(params.market_stats.annualized_return),
        percent(params.market_stats.annualized_volatility),
        "1.00".to_string(),
    ]);

    table
}

/// Correlation matrix labelled with the tickers from `stats`
///
/// Rows or columns without a matching ticker are labelled by index.
pub fn correlation_table(params: &FinancialResponse) -> Table {
    let label = |i: usize| {
        params
            .stats
            .get(i)
            .map_or_else(|| format!("#{i}"), |s| s.ticker.clone())
    };
    let width = params
        .correlation_matrix
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut header = vec![String::new()];
    header.extend((0..width).map(label));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);

    for (i, row) in params.correlation_matrix.iter().enumerate() {
        let mut cells = vec![label(i)];
        cells.extend(row.iter().map(|v| format!("{v:.2}")));
        table.add_row(cells);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_params::{MarketStat, TickerStat};

    fn sample() -> FinancialResponse {
        FinancialResponse {
            stats: vec![
                TickerStat {
                    ticker: "AAPL".to_string(),
                    annualized_return: 0.12,
                    annualized_volatility: 0.25,
                    beta: 1.1,
                },
                TickerStat {
                    ticker: "MSFT".to_string(),
                    annualized_return: 0.15,
                    annualized_volatility: 0.22,
                    beta: 0.95,
                },
            ],
            market_stats: MarketStat {
                annualized_return: 0.1,
                annualized_volatility: 0.18,
            },
            correlation_matrix: vec![vec![1.0, 0.6], vec![0.6, 1.0]],
        }
    }

    #[test]
    fn test_stats_table() {
        let rendered = stats_table(&sample(), "S&P 500").to_string();
        assert!(rendered.contains("AAPL"));
        assert!(rendered.contains("12.00%"));
        assert!(rendered.contains("0.95"));
        assert!(rendered.contains("S&P 500"));
        assert!(rendered.contains("18.00%"));
    }

    #[test]
    fn test_correlation_table() {
        let rendered = correlation_table(&sample()).to_string();
        assert!(rendered.contains("MSFT"));
        assert!(rendered.contains("0.60"));
        assert!(rendered.contains("1.00"));
    }

    #[test]
    fn test_correlation_table_with_extra_rows() {
        let mut params = sample();
        params.correlation_matrix.push(vec![0.1, 0.2, 1.0]);

        let rendered = correlation_table(&params).to_string();
        assert!(rendered.contains("#2"));
    }
}
