//! Typed parameter extraction from a `serde_json::Value` object.
//!
//! If the key is missing or the value has the wrong type, the default is
//! returned; extraction never fails.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing
/// or wrong type. JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}
