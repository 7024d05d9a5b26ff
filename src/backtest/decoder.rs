//! Columnar trade-log decoding.
//!
//! The engine returns each trade attribute as its own map keyed by stringified
//! row index. The maps are treated as sparse tables: only indices present in
//! all six columns become trades, survivors are ordered by the numeric value
//! of the index, and each surviving row is checked field-by-field before a
//! `Trade` is emitted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::backtest::error::DecodeError;
use crate::models::trade::{BacktestResult, RawBacktestResponse, RawTradeLog, Trade};

/// Row-oriented view of a columnar trade log.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTradeLog {
    /// Trades in ascending row-index order.
    pub trades: Vec<Trade>,
    /// Rows excluded because their index was missing from at least one column.
    pub incomplete_rows: usize,
}

/// Pivot the six parallel maps into ordered trade records.
///
/// Incomplete rows (index absent from any column) are excluded and counted,
/// not decoded with gaps. A value that cannot be represented (unparseable
/// date, non-finite number, fractional or negative duration, non-integer row
/// key) aborts the whole decode: that is a protocol mismatch, not a missing
/// row.
pub fn decode_trade_log(raw: &RawTradeLog) -> Result<DecodedTradeLog, DecodeError> {
    let mut indices: Vec<(u64, &str)> = Vec::with_capacity(raw.entry_date.len());
    let mut incomplete = 0usize;

    for key in union_of_keys(raw) {
        if !row_is_complete(raw, key) {
            incomplete += 1;
            continue;
        }
        let index = key
            .parse::<u64>()
            .map_err(|_| DecodeError::InvalidRowIndex(key.to_string()))?;
        indices.push((index, key));
    }

    // Numeric order, not lexical: "10" sorts after "2".
    indices.sort_unstable_by_key(|&(index, _)| index);

    if incomplete > 0 {
        warn!(
            incomplete_rows = incomplete,
            "excluding trade rows missing from one or more columns"
        );
    }

    let mut trades = Vec::with_capacity(indices.len());
    for (row, key) in indices {
        trades.push(decode_row(raw, row, key)?);
    }

    Ok(DecodedTradeLog {
        trades,
        incomplete_rows: incomplete,
    })
}

/// Decode a full engine response: aggregates pass through, the trade log is
/// pivoted.
pub fn decode_response(raw: RawBacktestResponse) -> Result<BacktestResult, DecodeError> {
    let log = decode_trade_log(&raw.trades)?;
    Ok(BacktestResult {
        summary: raw.summary,
        trades: log.trades,
        incomplete_rows: log.incomplete_rows,
    })
}

fn union_of_keys(raw: &RawTradeLog) -> impl Iterator<Item = &str> {
    let mut keys: Vec<&str> = raw
        .entry_date
        .keys()
        .chain(raw.exit_date.keys())
        .map(String::as_str)
        .chain(raw.entry_price.keys().map(String::as_str))
        .chain(raw.exit_price.keys().map(String::as_str))
        .chain(raw.return_frac.keys().map(String::as_str))
        .chain(raw.duration.keys().map(String::as_str))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys.into_iter()
}

fn row_is_complete(raw: &RawTradeLog, key: &str) -> bool {
    raw.entry_date.contains_key(key)
        && raw.exit_date.contains_key(key)
        && raw.entry_price.contains_key(key)
        && raw.exit_price.contains_key(key)
        && raw.return_frac.contains_key(key)
        && raw.duration.contains_key(key)
}

fn decode_row(raw: &RawTradeLog, row: u64, key: &str) -> Result<Trade, DecodeError> {
    let entry_date = parse_trade_date(row, "entry_date", &raw.entry_date[key])?;
    let exit_date = parse_trade_date(row, "exit_date", &raw.exit_date[key])?;
    let entry_price = finite(row, "entry_price", raw.entry_price[key])?;
    let exit_price = finite(row, "exit_price", raw.exit_price[key])?;
    let return_frac = finite(row, "return", raw.return_frac[key])?;
    let duration = decode_duration(row, raw.duration[key])?;

    Ok(Trade {
        entry_date,
        exit_date,
        entry_price,
        exit_price,
        return_frac,
        duration,
    })
}

/// Dates arrive as ISO strings: a bare date, a `T`-separated datetime, or a
/// full RFC 3339 timestamp. Only the calendar date is kept.
fn parse_trade_date(
    row: u64,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, DecodeError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    Err(DecodeError::InvalidDate {
        row,
        field,
        value: value.to_string(),
    })
}

fn finite(row: u64, field: &'static str, value: f64) -> Result<f64, DecodeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DecodeError::NonFiniteValue { row, field })
    }
}

fn decode_duration(row: u64, value: f64) -> Result<u32, DecodeError> {
    if !value.is_finite() {
        return Err(DecodeError::NonFiniteValue {
            row,
            field: "duration",
        });
    }
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(DecodeError::InvalidDuration { row, value });
    }
    Ok(value as u32)
}
