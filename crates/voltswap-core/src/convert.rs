// ── Wire-to-client key conversion ──
//
// Bridges raw backend payloads into the client's key convention. The
// backend speaks underscore-separated keys; everything in-memory uses
// camel-style keys. One recursive transform sits at that boundary, and
// the typed model layer deserializes from its output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SyncError;

// ── Key rewriting ───────────────────────────────────────────────────

/// `charge_percent` -> `chargePercent`.
fn camelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `chargePercent` -> `charge_percent`.
fn snakify(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// ── Recursive tree transform ────────────────────────────────────────

fn map_keys<F: Fn(&str) -> String>(value: Value, rename: &F) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| map_keys(v, rename)).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (rename(&k), map_keys(v, rename)))
                .collect(),
        ),
        other => other,
    }
}

/// Rewrite every object key from the wire convention to the client
/// convention, recursively.
///
/// Identity on primitives and `null`; arrays are transformed
/// element-wise with order and length preserved. Total -- never fails
/// on JSON-compatible input. If two distinct wire keys map to the same
/// client key, the later one (in the map's enumeration order) silently
/// overwrites the earlier.
pub fn to_client_case(value: Value) -> Value {
    map_keys(value, &camelize)
}

/// Rewrite every object key from the client convention to the wire
/// convention. Inverse of [`to_client_case`] on collision-free trees
/// whose keys follow the conventions.
pub fn to_wire_case(value: Value) -> Value {
    map_keys(value, &snakify)
}

// ── Typed boundary helpers ──────────────────────────────────────────

/// Normalize a wire payload and deserialize it into a domain type.
pub fn decode<T: DeserializeOwned>(wire: Value) -> Result<T, SyncError> {
    serde_json::from_value(to_client_case(wire)).map_err(|e| SyncError::Malformed {
        message: e.to_string(),
    })
}

/// Serialize a domain value and rewrite its keys for the wire.
pub fn encode<T: Serialize>(value: &T) -> Result<Value, SyncError> {
    let client = serde_json::to_value(value).map_err(|e| SyncError::Malformed {
        message: e.to_string(),
    })?;
    Ok(to_wire_case(client))
}
