//! Strategy backtest configuration and result decoding.
//!
//! The crate models the closed set of configurable trading strategies,
//! validates backtest submissions, serializes them into the wire shape the
//! remote backtest engine expects, and pivots the engine's columnar trade log
//! back into row-oriented records for display and aggregation.

pub mod backtest;
pub mod config;
pub mod logging;
pub mod models;
pub mod schema;
pub mod services;
