//! Trade records and backtest result shapes.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One decoded trade, row-oriented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    /// Fill price at entry, positive.
    pub entry_price: f64,
    /// Fill price at exit, positive.
    pub exit_price: f64,
    /// Signed fraction, e.g. 0.1 for +10%.
    #[serde(rename = "return")]
    pub return_frac: f64,
    /// Holding time in periods.
    pub duration: u32,
}

/// Columnar trade log as returned by the backtest engine.
///
/// Six parallel maps keyed by stringified row index. The engine emits them via
/// a column-major dump, so the key sets normally coincide; the decoder owns the
/// alignment rules when they do not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTradeLog {
    pub entry_date: HashMap<String, String>,
    pub exit_date: HashMap<String, String>,
    pub entry_price: HashMap<String, f64>,
    pub exit_price: HashMap<String, f64>,
    #[serde(rename = "return")]
    pub return_frac: HashMap<String, f64>,
    pub duration: HashMap<String, f64>,
}

/// Aggregate statistics block, passed through untransformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    pub total_return: f64,
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    pub win_rate: f64,
    pub avg_return_per_trade: f64,
    pub avg_winning_trade: f64,
    pub avg_losing_trade: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub final_capital: f64,
}

/// Wire response: aggregates plus the columnar trade log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBacktestResponse {
    #[serde(flatten)]
    pub summary: BacktestSummary,
    pub trades: RawTradeLog,
}

/// Decoded backtest outcome, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestResult {
    pub summary: BacktestSummary,
    /// Trades in ascending row-index order.
    pub trades: Vec<Trade>,
    /// Rows excluded because at least one column was missing their index.
    pub incomplete_rows: usize,
}
