//! Working set of configured strategies being assembled for a backtest.

use std::collections::HashSet;

use thiserror::Error;

use crate::backtest::request::BacktestRequest;
use crate::models::strategy::StrategyConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkspaceError {
    #[error("strategy `{0}` is already in the working set")]
    DuplicateStrategy(String),
}

/// Ordered collection of strategy configs with unique identifiers.
///
/// Mirrors the edit-session state behind the strategy list: configs keep their
/// insertion order for display, and the id set rejects a second instance with
/// the same identifier. Mutations are expected to come from a single writer
/// (one interaction at a time); the set only owns the uniqueness check.
#[derive(Debug, Clone, Default)]
pub struct StrategyWorkingSet {
    strategies: Vec<StrategyConfig>,
    ids: HashSet<String>,
}

impl StrategyWorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a config, rejecting a duplicate identifier.
    pub fn add(&mut self, config: StrategyConfig) -> Result<(), WorkspaceError> {
        if !self.ids.insert(config.id().to_string()) {
            return Err(WorkspaceError::DuplicateStrategy(config.id().to_string()));
        }
        self.strategies.push(config);
        Ok(())
    }

    /// Remove a config by identifier, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<StrategyConfig> {
        if !self.ids.remove(id) {
            return None;
        }
        let position = self.strategies.iter().position(|s| s.id() == id)?;
        Some(self.strategies.remove(position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Configs in insertion order.
    pub fn strategies(&self) -> &[StrategyConfig] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Snapshot the working set into a submittable request.
    pub fn into_request(
        self,
        ticker: impl Into<String>,
        initial_capital: f64,
        period: impl Into<String>,
    ) -> BacktestRequest {
        BacktestRequest::new(self.strategies, ticker, initial_capital, period)
    }
}
