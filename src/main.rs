use stratbench::backtest::{decode_response, validate_input};
use stratbench::logging::init_logging;
use stratbench::models::{BacktestResult, RawBacktestResponse, StrategyKind, StrategyWorkingSet};
use stratbench::schema::SchemaRegistry;

// Canned engine response in the columnar wire shape, including one row ("3")
// with no exit data yet.
const SAMPLE_RESPONSE: &str = r#"{
    "total_return": 0.271,
    "total_trades": 3,
    "winning_trades": 2,
    "losing_trades": 1,
    "win_rate": 0.667,
    "avg_return_per_trade": 0.09,
    "avg_winning_trade": 0.155,
    "avg_losing_trade": -0.04,
    "max_drawdown": -0.12,
    "sharpe_ratio": 1.31,
    "final_capital": 12710.0,
    "trades": {
        "entry_date": {"0": "2023-01-03", "1": "2023-03-14", "2": "2023-07-06", "3": "2023-11-20"},
        "exit_date": {"0": "2023-02-01", "1": "2023-04-28", "2": "2023-08-15"},
        "entry_price": {"0": 100.0, "1": 112.5, "2": 124.0, "3": 140.2},
        "exit_price": {"0": 110.0, "1": 108.0, "2": 150.0},
        "return": {"0": 0.1, "1": -0.04, "2": 0.21},
        "duration": {"0": 29, "1": 45, "2": 40}
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut working_set = StrategyWorkingSet::new();

    let rsi = SchemaRegistry::default_config(StrategyKind::RsiExtremes)
        .set_field("rsi_period", "21")?;
    working_set.add(rsi)?;

    let ma_cross = SchemaRegistry::default_config(StrategyKind::MovingAverageCross)
        .set_field("ma_type", "EMA")?;
    working_set.add(ma_cross)?;

    validate_input(working_set.strategies(), "AAPL", 10_000.0, "1y")?;

    let request = working_set.into_request("AAPL", 10_000.0, "1y");
    println!("Wire request:");
    println!("{}", serde_json::to_string_pretty(&request.to_wire())?);
    println!();

    let raw: RawBacktestResponse = serde_json::from_str(SAMPLE_RESPONSE)?;
    let result = decode_response(raw)?;
    print_result(&result);

    Ok(())
}

fn print_result(result: &BacktestResult) {
    let summary = &result.summary;
    println!("Backtest result:");
    println!("  Total Return: {:+.1}%", summary.total_return * 100.0);
    println!(
        "  Trades: {} ({} won / {} lost, win rate {:.1}%)",
        summary.total_trades,
        summary.winning_trades,
        summary.losing_trades,
        summary.win_rate * 100.0
    );
    println!("  Max Drawdown: {:.1}%", summary.max_drawdown * 100.0);
    println!("  Sharpe Ratio: {:.2}", summary.sharpe_ratio);
    println!("  Final Capital: ${:.2}", summary.final_capital);
    println!("  Trade log:");
    for trade in &result.trades {
        println!(
            "    {} -> {}  ${:.2} -> ${:.2}  {:+.1}% over {} periods",
            trade.entry_date,
            trade.exit_date,
            trade.entry_price,
            trade.exit_price,
            trade.return_frac * 100.0,
            trade.duration
        );
    }
    if result.incomplete_rows > 0 {
        println!(
            "  ({} open position(s) excluded from the log)",
            result.incomplete_rows
        );
    }
}
