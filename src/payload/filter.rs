//! Allow-list filtering against an object schema.

use serde_json::Value;

use super::Payload;
use crate::schema::ObjectSchema;

/// Restricts `payload` to options known by `schema` with a non-null value.
///
/// Unknown options are dropped without error so that option sets written
/// for other firmware trains still apply. Values are passed through with
/// nested nulls pruned (see [`remove_invalid_fields`]).
///
/// Filtering an already filtered payload returns it unchanged.
#[must_use]
pub fn filter_payload(payload: &Payload, schema: &ObjectSchema) -> Payload {
    let mut filtered = Payload::new();

    for (name, value) in payload {
        if value.is_null() {
            continue;
        }
        if !schema.contains(name) {
            tracing::debug!(
                "Dropping unknown option '{name}' for {} {}",
                schema.table,
                schema.object
            );
            continue;
        }
        filtered.insert(name.clone(), remove_invalid_fields(value.clone()));
    }

    filtered
}

/// Removes null members from objects and null elements from arrays, recursively.
#[must_use]
pub fn remove_invalid_fields(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, remove_invalid_fields(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(remove_invalid_fields)
                .collect(),
        ),
        other => other,
    }
}
