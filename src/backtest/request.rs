//! Outbound request model and wire serialization.

use serde::{Deserialize, Serialize};

use crate::models::strategy::StrategyConfig;

/// How the engine combines signals from the submitted strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
    All,
    #[default]
    Any,
    Majority,
}

/// One strategy as the engine receives it: a variant discriminant plus the
/// full params bag (identifier and kind included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPayload {
    #[serde(rename = "type")]
    pub strategy_type: String,
    pub params: StrategyConfig,
}

/// A backtest submission, assembled immediately before the call and discarded
/// after it returns. Identifier uniqueness is enforced upstream by the
/// working set.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestRequest {
    pub strategies: Vec<StrategyConfig>,
    pub ticker: String,
    pub initial_capital: f64,
    pub period: String,
    pub mode: CombineMode,
}

impl BacktestRequest {
    pub fn new(
        strategies: Vec<StrategyConfig>,
        ticker: impl Into<String>,
        initial_capital: f64,
        period: impl Into<String>,
    ) -> Self {
        Self {
            strategies,
            ticker: ticker.into(),
            initial_capital,
            period: period.into(),
            mode: CombineMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: CombineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the wire payload. Assumes `validate_input` already passed; no
    /// fields are dropped or renamed here.
    pub fn to_wire(&self) -> WireRequest {
        WireRequest {
            strategies: serialize_strategies(&self.strategies),
            ticker: self.ticker.clone(),
            initial_capital: self.initial_capital.to_string(),
            period: self.period.clone(),
            mode: self.mode,
        }
    }
}

/// Exact shape POSTed to the engine. Initial capital travels string-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRequest {
    pub strategies: Vec<StrategyPayload>,
    pub ticker: String,
    pub initial_capital: String,
    pub period: String,
    pub mode: CombineMode,
}

/// Wrap each config in its discriminant envelope, preserving input order.
pub fn serialize_strategies(strategies: &[StrategyConfig]) -> Vec<StrategyPayload> {
    strategies
        .iter()
        .map(|config| StrategyPayload {
            strategy_type: config.kind().to_string(),
            params: config.clone(),
        })
        .collect()
}
