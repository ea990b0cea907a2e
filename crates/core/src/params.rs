//! Pure helper functions for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail; they always produce a usable value.

use glam::DVec3;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `DVec3` from a three-element numeric array at `params[name]`.
///
/// Anything other than exactly three numbers yields `default`.
pub fn param_vec3(params: &Value, name: &str, default: DVec3) -> DVec3 {
    let Some(items) = params.get(name).and_then(Value::as_array) else {
        return default;
    };
    match items.as_slice() {
        [x, y, z] => match (x.as_f64(), y.as_f64(), z.as_f64()) {
            (Some(x), Some(y), Some(z)) => DVec3::new(x, y, z),
            _ => default,
        },
        _ => default,
    }
}

/// Serializes a `DVec3` in the `[x, y, z]` layout read by [`param_vec3`].
pub fn vec3_to_json(v: DVec3) -> Value {
    Value::from(vec![v.x, v.y, v.z])
}
