use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stratbench::backtest::BacktestRequest;
use stratbench::models::StrategyKind;
use stratbench::schema::SchemaRegistry;
use stratbench::services::BacktestClient;

/// Helper structure bundling the client under test with its mocked engine.
pub struct TestEngine {
    pub server: MockServer,
    pub client: BacktestClient,
}

impl TestEngine {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = BacktestClient::with_client(server.uri(), reqwest::Client::new());
        Self { server, client }
    }

    pub async fn mock_backtest(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/backtest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_backtest_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/backtest"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock that only matches requests carrying the expected submission
    /// fields, so a shape regression shows up as an unmatched request.
    pub async fn mock_backtest_expecting(&self, expected: Value, body: Value) {
        Mock::given(method("POST"))
            .and(path("/backtest"))
            .and(body_partial_json(expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

pub fn sample_request() -> BacktestRequest {
    let strategies = vec![
        SchemaRegistry::default_config(StrategyKind::RsiExtremes),
        SchemaRegistry::default_config(StrategyKind::MovingAverageCross),
    ];
    BacktestRequest::new(strategies, "AAPL", 10_000.0, "1y")
}

pub fn sample_response() -> Value {
    json!({
        "total_return": 0.15,
        "total_trades": 2,
        "winning_trades": 1,
        "losing_trades": 1,
        "win_rate": 0.5,
        "avg_return_per_trade": 0.075,
        "avg_winning_trade": 0.2,
        "avg_losing_trade": -0.05,
        "max_drawdown": -0.08,
        "sharpe_ratio": 1.1,
        "final_capital": 11500.0,
        "trades": {
            "entry_date": {"0": "2023-01-03", "1": "2023-06-01"},
            "exit_date": {"0": "2023-03-01", "1": "2023-08-15"},
            "entry_price": {"0": 100.0, "1": 130.0},
            "exit_price": {"0": 120.0, "1": 123.5},
            "return": {"0": 0.2, "1": -0.05},
            "duration": {"0": 57, "1": 75}
        }
    })
}
