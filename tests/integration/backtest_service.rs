//! Integration tests for the backtest service client
//!
//! The remote engine is a wiremock server; the tests drive the full pipeline
//! from request serialization through trade-log decoding.

#[path = "test_utils.rs"]
mod test_utils;

use chrono::NaiveDate;
use serde_json::json;

use stratbench::backtest::CombineMode;
use stratbench::services::ServiceError;

use test_utils::{sample_request, sample_response, TestEngine};

#[tokio::test]
async fn runs_a_backtest_end_to_end() {
    let engine = TestEngine::new().await;
    engine.mock_backtest(sample_response()).await;

    let result = engine.client.run(&sample_request()).await.unwrap();

    assert_eq!(result.summary.total_trades, 2);
    assert_eq!(result.summary.final_capital, 11500.0);
    assert_eq!(result.trades.len(), 2);
    assert_eq!(
        result.trades[0].entry_date,
        NaiveDate::from_ymd_opt(2023, 1, 3).unwrap()
    );
    assert_eq!(result.trades[1].return_frac, -0.05);
    assert_eq!(result.incomplete_rows, 0);
}

#[tokio::test]
async fn submits_the_documented_wire_shape() {
    let engine = TestEngine::new().await;
    engine
        .mock_backtest_expecting(
            json!({
                "ticker": "AAPL",
                "initial_capital": "10000",
                "period": "1y",
                "mode": "any",
                "strategies": [
                    {"type": "rsi_extremes", "params": {"name": "RSI Extremes", "id": "rsi_extremes", "rsi_period": 14.0}},
                    {"type": "moving_average_cross", "params": {"name": "Moving Average Cross", "ma_type": "SMA"}}
                ]
            }),
            sample_response(),
        )
        .await;

    // An unmatched body would surface as a 404 from wiremock.
    let result = engine.client.run(&sample_request()).await.unwrap();
    assert_eq!(result.trades.len(), 2);
}

#[tokio::test]
async fn carries_the_combine_mode() {
    let engine = TestEngine::new().await;
    engine
        .mock_backtest_expecting(json!({"mode": "majority"}), sample_response())
        .await;

    let request = sample_request().with_mode(CombineMode::Majority);
    assert!(engine.client.run(&request).await.is_ok());
}

#[tokio::test]
async fn surfaces_http_failures_as_status_errors() {
    let engine = TestEngine::new().await;
    engine.mock_backtest_failure(500).await;

    let err = engine.client.run(&sample_request()).await.unwrap_err();
    match err {
        ServiceError::Status(status) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn counts_open_positions_excluded_from_the_log() {
    let engine = TestEngine::new().await;
    let mut body = sample_response();
    // Entry columns gain a row "2" with no matching exit data.
    body["trades"]["entry_date"]["2"] = json!("2023-12-01");
    body["trades"]["entry_price"]["2"] = json!(140.0);
    engine.mock_backtest(body).await;

    let result = engine.client.run(&sample_request()).await.unwrap();
    assert_eq!(result.trades.len(), 2);
    assert_eq!(result.incomplete_rows, 1);
}

#[tokio::test]
async fn rejects_a_malformed_trade_log() {
    let engine = TestEngine::new().await;
    let mut body = sample_response();
    body["trades"]["exit_date"]["1"] = json!("not-a-date");
    engine.mock_backtest(body).await;

    let err = engine.client.run(&sample_request()).await.unwrap_err();
    assert!(
        matches!(err, ServiceError::Decode(_)),
        "expected decode error, got {err:?}"
    );
}
