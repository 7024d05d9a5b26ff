use thiserror::Error;

use crate::models::strategy::StrategyKind;

/// Errors raised while building or editing a strategy configuration.
///
/// All of these are caller mistakes and recoverable: the offending mutation is
/// rejected and the prior configuration stays intact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("unknown strategy variant `{0}`")]
    UnknownVariant(String),

    #[error("strategy `{kind}` has no field `{field}`")]
    UnknownField { kind: StrategyKind, field: String },

    #[error("field `{field}` expects a finite number, got `{value}`")]
    InvalidType { field: &'static str, value: String },

    #[error("field `{field}` must be one of {options:?}, got `{value}`")]
    InvalidChoice {
        field: &'static str,
        value: String,
        options: &'static [&'static str],
    },
}
