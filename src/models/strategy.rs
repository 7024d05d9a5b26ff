//! Strategy configuration data model.
//!
//! `StrategyConfig` is a closed tagged union over the supported variants. The
//! serde tag is the display name so a serialized config matches the params bag
//! the backtest engine expects (`{name, id, ...fields}`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::error::SchemaError;

/// Wire discriminant for a strategy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    RsiExtremes,
    MovingAverageCross,
    MacdCross,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::RsiExtremes => "rsi_extremes",
            StrategyKind::MovingAverageCross => "moving_average_cross",
            StrategyKind::MacdCross => "macd_cross",
        }
    }

    /// All supported kinds, in presentation order.
    pub fn all() -> [StrategyKind; 3] {
        [
            StrategyKind::RsiExtremes,
            StrategyKind::MovingAverageCross,
            StrategyKind::MacdCross,
        ]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rsi_extremes" => Ok(StrategyKind::RsiExtremes),
            "moving_average_cross" => Ok(StrategyKind::MovingAverageCross),
            "macd_cross" => Ok(StrategyKind::MacdCross),
            other => Err(SchemaError::UnknownVariant(other.to_string())),
        }
    }
}

/// Moving-average flavor for the cross strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaType {
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "EMA")]
    Ema,
}

impl MaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaType::Sma => "SMA",
            MaType::Ema => "EMA",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "SMA" => Some(MaType::Sma),
            "EMA" => Some(MaType::Ema),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiExtremesParams {
    pub id: String,
    pub rsi_period: f64,
    pub overbought_threshold: f64,
    pub oversold_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageCrossParams {
    pub id: String,
    pub lower_period: f64,
    pub upper_period: f64,
    pub ma_type: MaType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdCrossParams {
    pub id: String,
    pub short_period: f64,
    pub long_period: f64,
    pub signal_period: f64,
}

/// One configured strategy instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum StrategyConfig {
    #[serde(rename = "RSI Extremes")]
    RsiExtremes(RsiExtremesParams),
    #[serde(rename = "Moving Average Cross")]
    MovingAverageCross(MovingAverageCrossParams),
    #[serde(rename = "MACD Cross")]
    MacdCross(MacdCrossParams),
}

impl StrategyConfig {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyConfig::RsiExtremes(_) => StrategyKind::RsiExtremes,
            StrategyConfig::MovingAverageCross(_) => StrategyKind::MovingAverageCross,
            StrategyConfig::MacdCross(_) => StrategyKind::MacdCross,
        }
    }

    /// Caller-assigned identifier, unique within one backtest request.
    pub fn id(&self) -> &str {
        match self {
            StrategyConfig::RsiExtremes(p) => &p.id,
            StrategyConfig::MovingAverageCross(p) => &p.id,
            StrategyConfig::MacdCross(p) => &p.id,
        }
    }

    /// Display label, as shown on the strategy card.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyConfig::RsiExtremes(_) => "RSI Extremes",
            StrategyConfig::MovingAverageCross(_) => "Moving Average Cross",
            StrategyConfig::MacdCross(_) => "MACD Cross",
        }
    }

    /// Replace the identifier, keeping all other fields.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        match &mut self {
            StrategyConfig::RsiExtremes(p) => p.id = id,
            StrategyConfig::MovingAverageCross(p) => p.id = id,
            StrategyConfig::MacdCross(p) => p.id = id,
        }
        self
    }

    /// Apply one field edit, returning the updated configuration.
    ///
    /// Value semantics: the receiver is left untouched, so a rejected edit
    /// cannot corrupt form state and undo stays trivial. Numeric fields parse
    /// the raw string as a finite number, select fields must hit one of the
    /// declared options.
    pub fn set_field(&self, field: &str, raw: &str) -> Result<StrategyConfig, SchemaError> {
        let mut next = self.clone();
        match &mut next {
            StrategyConfig::RsiExtremes(p) => match field {
                "rsi_period" => p.rsi_period = parse_numeric("rsi_period", raw)?,
                "overbought_threshold" => {
                    p.overbought_threshold = parse_numeric("overbought_threshold", raw)?
                }
                "oversold_threshold" => {
                    p.oversold_threshold = parse_numeric("oversold_threshold", raw)?
                }
                _ => return Err(self.unknown_field(field)),
            },
            StrategyConfig::MovingAverageCross(p) => match field {
                "lower_period" => p.lower_period = parse_numeric("lower_period", raw)?,
                "upper_period" => p.upper_period = parse_numeric("upper_period", raw)?,
                "ma_type" => {
                    p.ma_type = MaType::parse(raw).ok_or_else(|| SchemaError::InvalidChoice {
                        field: "ma_type",
                        value: raw.to_string(),
                        options: crate::schema::registry::MA_TYPE_OPTIONS,
                    })?
                }
                _ => return Err(self.unknown_field(field)),
            },
            StrategyConfig::MacdCross(p) => match field {
                "short_period" => p.short_period = parse_numeric("short_period", raw)?,
                "long_period" => p.long_period = parse_numeric("long_period", raw)?,
                "signal_period" => p.signal_period = parse_numeric("signal_period", raw)?,
                _ => return Err(self.unknown_field(field)),
            },
        }
        Ok(next)
    }

    fn unknown_field(&self, field: &str) -> SchemaError {
        SchemaError::UnknownField {
            kind: self.kind(),
            field: field.to_string(),
        }
    }
}

fn parse_numeric(field: &'static str, raw: &str) -> Result<f64, SchemaError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SchemaError::InvalidType {
            field,
            value: raw.to_string(),
        })
}
