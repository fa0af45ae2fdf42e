//! Key conversion from the user-facing to the wire naming convention.

use serde_json::Value;

use super::Payload;

/// Replaces `_` with `-` in every object key of `value`, at every depth.
///
/// Arrays are walked so objects nested inside them are rewritten too.
/// Scalar values, including strings containing underscores, are untouched.
#[must_use]
pub fn rewrite_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(rewrite_map(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(rewrite_keys).collect()),
        other => other,
    }
}

/// [`rewrite_keys`] for a top-level option mapping.
#[must_use]
pub fn rewrite_map(map: Payload) -> Payload {
    map.into_iter()
        .map(|(k, v)| (k.replace('_', "-"), rewrite_keys(v)))
        .collect()
}
