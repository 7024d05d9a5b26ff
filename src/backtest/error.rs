use thiserror::Error;

/// Submission-gate failures, surfaced as a single human-readable reason.
///
/// Never fatal: the caller corrects the input and retries. The remote service
/// re-validates independently, so this gate is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No strategies provided")]
    NoStrategies,
    #[error("Ticker is required")]
    MissingTicker,
    #[error("Initial capital must be greater than 0")]
    NonPositiveCapital,
    #[error("Period is required")]
    MissingPeriod,
    #[error("Invalid period format. Supported periods: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max")]
    InvalidPeriodFormat,
}

/// Malformed trade-log payload.
///
/// Any of these means the engine returned an internally inconsistent response;
/// the whole result is rejected rather than partially displayed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("trade log row index `{0}` is not an unsigned integer")]
    InvalidRowIndex(String),

    #[error("trade log row {row}: `{field}` is not an ISO date: `{value}`")]
    InvalidDate {
        row: u64,
        field: &'static str,
        value: String,
    },

    #[error("trade log row {row}: `{field}` is not a finite number")]
    NonFiniteValue { row: u64, field: &'static str },

    #[error("trade log row {row}: duration {value} is not a non-negative integer")]
    InvalidDuration { row: u64, value: f64 },
}
