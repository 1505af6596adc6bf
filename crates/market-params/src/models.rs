//! Financial parameter data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used when comparing matrix entries
const SHAPE_EPSILON: f64 = 1e-6;

/// Square matrix of pairwise correlations, ordered like `stats`
pub type CorrelationMatrix = Vec<Vec<f64>>;

/// Estimated statistics for one requested ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStat {
    pub ticker: String,
    pub annualized_return: f64,
    pub annualized_volatility: f64,
    /// Beta relative to the market benchmark
    pub beta: f64,
}

/// Estimated statistics for the market benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStat {
    pub annualized_return: f64,
    pub annualized_volatility: f64,
}

/// Full response for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialResponse {
    pub stats: Vec<TickerStat>,
    pub market_stats: MarketStat,
    pub correlation_matrix: CorrelationMatrix,
}

/// A structural problem in a returned correlation matrix
///
/// These are reported, never enforced.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeIssue {
    /// Matrix has a different dimension than `stats`
    DimensionMismatch { rows: usize, stats: usize },
    /// A row has the wrong length
    RaggedRow { row: usize, len: usize, expected: usize },
    /// `m[row][col]` differs from `m[col][row]`
    Asymmetric { row: usize, col: usize },
    /// Diagonal entry is not 1
    Diagonal { index: usize, value: f64 },
    /// Coefficient outside [-1, 1]
    OutOfRange { row: usize, col: usize, value: f64 },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { rows, stats } => {
                write!(f, "matrix has {rows} rows but {stats} tickers were returned")
            }
            Self::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has {len} entries, expected {expected}")
            }
            Self::Asymmetric { row, col } => {
                write!(f, "entry ({row}, {col}) differs from ({col}, {row})")
            }
            Self::Diagonal { index, value } => {
                write!(f, "diagonal entry {index} is {value}, expected 1")
            }
            Self::OutOfRange { row, col, value } => {
                write!(f, "entry ({row}, {col}) is {value}, outside [-1, 1]")
            }
        }
    }
}

impl FinancialResponse {
    /// Find the stats for a ticker (exact match)
    pub fn stat(&self, ticker: &str) -> Option<&TickerStat> {
        self.stats.iter().find(|s| s.ticker == ticker)
    }

    /// Correlation between two tickers, using the order of `stats`
    pub fn correlation(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.stats.iter().position(|s| s.ticker == a)?;
        let j = self.stats.iter().position(|s| s.ticker == b)?;
        self.correlation_matrix.get(i)?.get(j).copied()
    }

    /// Report structural problems in the correlation matrix
    pub fn shape_issues(&self) -> Vec<ShapeIssue> {
        let m = &self.correlation_matrix;
        let n = m.len();
        let mut issues = Vec::new();

        if n != self.stats.len() {
            issues.push(ShapeIssue::DimensionMismatch {
                rows: n,
                stats: self.stats.len(),
            });
        }

        for (row, values) in m.iter().enumerate() {
            if values.len() != n {
                issues.push(ShapeIssue::RaggedRow {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }

            for (col, &value) in values.iter().enumerate() {
                if !(-1.0 - SHAPE_EPSILON..=1.0 + SHAPE_EPSILON).contains(&value) {
                    issues.push(ShapeIssue::OutOfRange { row, col, value });
                }
                if row == col && (value - 1.0).abs() > SHAPE_EPSILON {
                    issues.push(ShapeIssue::Diagonal { index: row, value });
                }
                if col > row {
                    if let Some(mirror) = m.get(col).and_then(|r| r.get(row)) {
                        if (value - mirror).abs() > SHAPE_EPSILON {
                            issues.push(ShapeIssue::Asymmetric { row, col });
                        }
                    }
                }
            }
        }

        issues
    }
}
