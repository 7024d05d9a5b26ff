//! Pre-submission validation of backtest parameters.

use crate::backtest::error::ValidationError;
use crate::models::strategy::StrategyConfig;

/// Validate a proposed backtest submission.
///
/// Checks run in a fixed order and stop at the first failure, so the caller
/// always sees the earliest-checked reason. Pure function, no side effects.
pub fn validate_input(
    strategies: &[StrategyConfig],
    ticker: &str,
    initial_capital: f64,
    period: &str,
) -> Result<(), ValidationError> {
    if strategies.is_empty() {
        return Err(ValidationError::NoStrategies);
    }

    if ticker.is_empty() {
        return Err(ValidationError::MissingTicker);
    }

    if !(initial_capital > 0.0) {
        return Err(ValidationError::NonPositiveCapital);
    }

    if period.is_empty() {
        return Err(ValidationError::MissingPeriod);
    }

    if !is_valid_period(period) {
        return Err(ValidationError::InvalidPeriodFormat);
    }

    Ok(())
}

/// Historical-range grammar accepted by the market-data source:
/// one or more digits followed by `d`, `m`, `y`, or `mo`, or the literals
/// `ytd` / `max`. Case-insensitive, surrounding whitespace ignored.
pub fn is_valid_period(period: &str) -> bool {
    let p = period.trim().to_ascii_lowercase();

    if p == "ytd" || p == "max" {
        return true;
    }

    let digits = p.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }

    matches!(&p[digits..], "d" | "m" | "y" | "mo")
}
