//! Unit tests for the strategy schema registry

use serde_json::Value;
use stratbench::models::StrategyKind;
use stratbench::schema::{FieldKind, SchemaError, SchemaRegistry};

#[test]
fn lookup_resolves_every_discriminant() {
    for kind in StrategyKind::all() {
        let spec = SchemaRegistry::lookup(kind.as_str()).unwrap();
        assert_eq!(spec.kind, kind);
    }
}

#[test]
fn lookup_chains_into_a_default_config() {
    let config = SchemaRegistry::lookup("macd_cross").unwrap().default_config();
    assert_eq!(config.kind(), StrategyKind::MacdCross);
    assert_eq!(config.id(), "macd_cross");
}

#[test]
fn lookup_rejects_unknown_variant() {
    let err = SchemaRegistry::lookup("bollinger_bounce").unwrap_err();
    assert_eq!(err, SchemaError::UnknownVariant("bollinger_bounce".to_string()));
}

#[test]
fn variant_labels_match_display_names() {
    assert_eq!(SchemaRegistry::spec(StrategyKind::RsiExtremes).label, "RSI Extremes");
    assert_eq!(
        SchemaRegistry::spec(StrategyKind::MovingAverageCross).label,
        "Moving Average Cross"
    );
    assert_eq!(SchemaRegistry::spec(StrategyKind::MacdCross).label, "MACD Cross");
}

#[test]
fn field_order_is_declaration_order() {
    let spec = SchemaRegistry::spec(StrategyKind::MacdCross);
    let names: Vec<&str> = spec.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["short_period", "long_period", "signal_period"]);
}

#[test]
fn field_lookup_by_name() {
    let spec = SchemaRegistry::spec(StrategyKind::MovingAverageCross);
    let field = spec.field("ma_type").unwrap();
    assert_eq!(field.label, "MA Type");
    assert_eq!(field.kind, FieldKind::Select(&["SMA", "EMA"]));
    assert!(spec.field("rsi_period").is_none());
}

/// The serialized key set of a default config must be exactly {name, id} plus
/// the declared field set - no extra, no missing keys.
#[test]
fn default_config_key_set_matches_declared_fields() {
    for kind in StrategyKind::all() {
        let spec = SchemaRegistry::spec(kind);
        let config = SchemaRegistry::default_config(kind);
        let value = serde_json::to_value(&config).unwrap();

        let Value::Object(map) = value else {
            panic!("config must serialize to an object");
        };
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();

        let mut expected: Vec<&str> = spec.fields.iter().map(|f| f.name).collect();
        expected.push("name");
        expected.push("id");
        expected.sort_unstable();

        assert_eq!(keys, expected, "key set mismatch for {kind}");
    }
}

#[test]
fn rsi_extremes_defaults() {
    let value = serde_json::to_value(SchemaRegistry::default_config(StrategyKind::RsiExtremes))
        .unwrap();
    assert_eq!(value["id"], "rsi_extremes");
    assert_eq!(value["rsi_period"], 14.0);
    assert_eq!(value["overbought_threshold"], 70.0);
    assert_eq!(value["oversold_threshold"], 30.0);
}

#[test]
fn moving_average_cross_defaults_select_first_option() {
    let value = serde_json::to_value(
        SchemaRegistry::default_config(StrategyKind::MovingAverageCross),
    )
    .unwrap();
    assert_eq!(value["lower_period"], 50.0);
    assert_eq!(value["upper_period"], 200.0);
    // First listed option of the select field.
    assert_eq!(value["ma_type"], "SMA");
}

#[test]
fn macd_cross_defaults() {
    let value =
        serde_json::to_value(SchemaRegistry::default_config(StrategyKind::MacdCross)).unwrap();
    assert_eq!(value["short_period"], 12.0);
    assert_eq!(value["long_period"], 26.0);
    assert_eq!(value["signal_period"], 9.0);
}
