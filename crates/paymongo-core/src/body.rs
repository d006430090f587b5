//! Request-body shaping.
//!
//! The API expects request bodies as `{ "data": { "attributes": { ... } } }`
//! with underscore-joined lowercase keys. Parameter types serialize with
//! Rust field names already in that form; the key transform still runs over
//! the serialized tree so that caller-supplied maps (metadata) written as
//! `camelCase` land in the API's convention too.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Convert one key from word-boundary style to underscore style.
///
/// `paymentMethodAllowed` becomes `payment_method_allowed`. Keys already in
/// underscore style are returned unchanged.
#[must_use]
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrite every object key with [`to_snake_case`], dropping `null` values.
///
/// Nested objects are rewritten recursively. Arrays are left as they are,
/// elements included.
#[must_use]
pub fn to_snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(transform_object(map)),
        other => other,
    }
}

fn transform_object(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (to_snake_case(&k), to_snake_case_keys(v)))
        .collect()
}

/// Serialize `params` and wrap them in the API's attribute envelope.
///
/// # Errors
///
/// Returns an error if `params` cannot be represented as JSON.
pub fn wrap_attributes<P: Serialize + ?Sized>(params: &P) -> Result<Value, serde_json::Error> {
    let attributes = to_snake_case_keys(serde_json::to_value(params)?);
    Ok(json!({ "data": { "attributes": attributes } }))
}
