//! Backtest submission pipeline: validation, request serialization, and
//! trade-log decoding.

pub mod decoder;
pub mod error;
pub mod request;
pub mod validation;

pub use decoder::{decode_response, decode_trade_log, DecodedTradeLog};
pub use error::{DecodeError, ValidationError};
pub use request::{serialize_strategies, BacktestRequest, CombineMode, StrategyPayload, WireRequest};
pub use validation::validate_input;
