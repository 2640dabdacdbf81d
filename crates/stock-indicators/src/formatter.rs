//! Flat JSON records handed back to the calling agent

use crate::error::{IndicatorError, StockError};
use crate::indicators::IndicatorResult;
use serde_json::{Map, Value, json};

/// Flat record with `sma_<n>` keys named after the windows used
///
/// With default windows the keys are `symbol`, `current_price`, `sma_20`,
/// `sma_50`, `rsi`, `volume` and `trend_signal`. Undefined indicators are
/// `null`. Equal short and long windows name the same average, so the
/// record then carries a single `sma_<n>` key holding `sma_short`.
pub fn indicator_record(result: &IndicatorResult) -> Value {
    let mut record = Map::new();
    record.insert("symbol".into(), json!(result.symbol));
    record.insert("current_price".into(), json!(result.current_price));
    record.insert(format!("sma_{}", result.window.short), json!(result.sma_short));
    if result.window.long != result.window.short {
        record.insert(format!("sma_{}", result.window.long), json!(result.sma_long));
    }
    record.insert("rsi".into(), json!(result.rsi));
    record.insert("volume".into(), json!(result.volume));
    record.insert("trend_signal".into(), json!(result.trend_signal.as_str()));
    Value::Object(record)
}

/// Error payload for an engine failure
pub fn error_record(err: &IndicatorError) -> Value {
    json!({
        "error": err.to_string(),
        "kind": err.kind(),
    })
}

/// Error payload for any tool-level failure
pub fn stock_error_record(err: &StockError) -> Value {
    match err {
        StockError::Indicator(inner) => error_record(inner),
        other => json!({
            "error": other.to_string(),
            "kind": other.kind(),
        }),
    }
}

/// Two-space indented JSON for text channels
pub fn to_pretty_string(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
