//! Runtime configuration sourced from the environment.

use std::env;

pub const DEFAULT_BACKTEST_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment environment name, defaulting to `development`.
pub fn get_environment() -> String {
    env::var("STRATBENCH_ENV").unwrap_or_else(|_| "development".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backtest engine.
    pub backtest_api_url: String,
    /// Per-request timeout for the engine call.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load from the process environment, reading a `.env` file if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            backtest_api_url: env::var("BACKTEST_API_URL")
                .unwrap_or_else(|_| DEFAULT_BACKTEST_API_URL.to_string()),
            request_timeout_secs: env::var("BACKTEST_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backtest_api_url: DEFAULT_BACKTEST_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
