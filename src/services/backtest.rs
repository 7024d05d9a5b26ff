//! HTTP client for the remote backtest engine.

use tracing::{debug, info};

use crate::backtest::decoder::decode_response;
use crate::backtest::error::DecodeError;
use crate::backtest::request::BacktestRequest;
use crate::config::Config;
use crate::models::trade::{BacktestResult, RawBacktestResponse};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backtest request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backtest service returned status {0}")]
    Status(u16),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Thin client over the engine's REST surface.
///
/// No retries or cancellation live here; an abandoned call is simply a dropped
/// future. Decoding never runs on a failed transport; the status is checked
/// before the body is read.
pub struct BacktestClient {
    base_url: String,
    http: reqwest::Client,
}

impl BacktestClient {
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(config.backtest_api_url.clone(), http))
    }

    /// Construct against an explicit base URL and client, used by tests to
    /// point at a mock server.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    /// Submit a backtest and decode the engine's response.
    pub async fn run(&self, request: &BacktestRequest) -> Result<BacktestResult, ServiceError> {
        let wire = request.to_wire();
        debug!(
            ticker = %request.ticker,
            period = %request.period,
            strategies = request.strategies.len(),
            "submitting backtest"
        );

        let response = self
            .http
            .post(format!("{}/backtest", self.base_url))
            .json(&wire)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let raw: RawBacktestResponse = response.json().await?;
        let result = decode_response(raw)?;
        info!(
            trades = result.trades.len(),
            total_return = result.summary.total_return,
            "backtest complete"
        );
        Ok(result)
    }
}
