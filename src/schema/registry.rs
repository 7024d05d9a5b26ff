//! Static field-schema registry for the supported strategy variants.
//!
//! The registry is pure data: one `VariantSpec` per strategy kind, listing the
//! configurable fields in the order forms should render them. It is built into
//! the binary, never mutated, and owns no resources.

use crate::models::strategy::{
    MaType, MacdCrossParams, MovingAverageCrossParams, RsiExtremesParams, StrategyConfig,
    StrategyKind,
};
use crate::schema::error::SchemaError;

pub const DEFAULT_RSI_PERIOD: f64 = 14.0;
pub const DEFAULT_OVERBOUGHT_THRESHOLD: f64 = 70.0;
pub const DEFAULT_OVERSOLD_THRESHOLD: f64 = 30.0;
pub const DEFAULT_LOWER_MA_PERIOD: f64 = 50.0;
pub const DEFAULT_UPPER_MA_PERIOD: f64 = 200.0;
pub const DEFAULT_MACD_SHORT_PERIOD: f64 = 12.0;
pub const DEFAULT_MACD_LONG_PERIOD: f64 = 26.0;
pub const DEFAULT_MACD_SIGNAL_PERIOD: f64 = 9.0;

/// Value kind of a configurable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Finite number, edited as free text and parsed on commit.
    Numeric,
    /// Arbitrary string, no further checks at this layer.
    Text,
    /// One of a fixed, ordered set of options; the first option is the default.
    Select(&'static [&'static str]),
}

/// Declarative description of one configurable strategy parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Field schema for one strategy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub kind: StrategyKind,
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl VariantSpec {
    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fresh configuration for this variant with every field defaulted.
    pub fn default_config(&self) -> StrategyConfig {
        SchemaRegistry::default_config(self.kind)
    }
}

pub const MA_TYPE_OPTIONS: &[&str] = &["SMA", "EMA"];

static RSI_EXTREMES_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "rsi_period",
        label: "RSI Period",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "overbought_threshold",
        label: "Overbought Threshold",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "oversold_threshold",
        label: "Oversold Threshold",
        kind: FieldKind::Numeric,
    },
];

static MOVING_AVERAGE_CROSS_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "lower_period",
        label: "Lower Period",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "upper_period",
        label: "Upper Period",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "ma_type",
        label: "MA Type",
        kind: FieldKind::Select(MA_TYPE_OPTIONS),
    },
];

static MACD_CROSS_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "short_period",
        label: "Short Period",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "long_period",
        label: "Long Period",
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "signal_period",
        label: "Signal Period",
        kind: FieldKind::Numeric,
    },
];

static VARIANTS: [VariantSpec; 3] = [
    VariantSpec {
        kind: StrategyKind::RsiExtremes,
        label: "RSI Extremes",
        fields: &RSI_EXTREMES_FIELDS,
    },
    VariantSpec {
        kind: StrategyKind::MovingAverageCross,
        label: "Moving Average Cross",
        fields: &MOVING_AVERAGE_CROSS_FIELDS,
    },
    VariantSpec {
        kind: StrategyKind::MacdCross,
        label: "MACD Cross",
        fields: &MACD_CROSS_FIELDS,
    },
];

/// Catalog of all supported strategy variants.
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// All variant specs, in presentation order.
    pub fn all() -> &'static [VariantSpec] {
        &VARIANTS
    }

    /// Resolve a wire discriminant (e.g. `"rsi_extremes"`) to its spec.
    pub fn lookup(name: &str) -> Result<&'static VariantSpec, SchemaError> {
        let kind = name.parse::<StrategyKind>()?;
        Ok(Self::spec(kind))
    }

    /// Spec for a known variant kind.
    pub fn spec(kind: StrategyKind) -> &'static VariantSpec {
        match kind {
            StrategyKind::RsiExtremes => &VARIANTS[0],
            StrategyKind::MovingAverageCross => &VARIANTS[1],
            StrategyKind::MacdCross => &VARIANTS[2],
        }
    }

    /// Build a configuration with every field set to its default.
    ///
    /// Numeric defaults are the module constants above; select fields default
    /// to their first listed option. The identifier defaults to the variant
    /// discriminant, matching what the form seeds for a freshly added strategy.
    pub fn default_config(kind: StrategyKind) -> StrategyConfig {
        match kind {
            StrategyKind::RsiExtremes => StrategyConfig::RsiExtremes(RsiExtremesParams {
                id: kind.as_str().to_string(),
                rsi_period: DEFAULT_RSI_PERIOD,
                overbought_threshold: DEFAULT_OVERBOUGHT_THRESHOLD,
                oversold_threshold: DEFAULT_OVERSOLD_THRESHOLD,
            }),
            StrategyKind::MovingAverageCross => {
                StrategyConfig::MovingAverageCross(MovingAverageCrossParams {
                    id: kind.as_str().to_string(),
                    lower_period: DEFAULT_LOWER_MA_PERIOD,
                    upper_period: DEFAULT_UPPER_MA_PERIOD,
                    ma_type: MaType::Sma,
                })
            }
            StrategyKind::MacdCross => StrategyConfig::MacdCross(MacdCrossParams {
                id: kind.as_str().to_string(),
                short_period: DEFAULT_MACD_SHORT_PERIOD,
                long_period: DEFAULT_MACD_LONG_PERIOD,
                signal_period: DEFAULT_MACD_SIGNAL_PERIOD,
            }),
        }
    }
}
