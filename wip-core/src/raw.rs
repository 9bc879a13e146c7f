//! Lenient accessors over untyped server records.
//!
//! Every accessor degrades instead of failing: a missing key, a `null`, or a
//! value of the wrong shape reads as `0`, `""` or an empty slice.

use serde_json::Value;

/// Numeric field, coerced. Numbers pass through, numeric strings are parsed,
/// everything else (absent, null, bools, containers, garbage strings) is 0.
pub fn num(record: &Value, key: &str) -> f64 {
    match record.get(key) {
        None | Some(Value::Null) => 0.0,
        Some(v) => match coerce_f64(v) {
            Some(n) => n,
            None => {
                tracing::trace!(key, value = %v, "non-numeric field read as 0");
                0.0
            }
        },
    }
}

fn coerce_f64(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Some(0.0);
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// String field. Scalars are rendered, anything else is empty.
pub fn text(record: &Value, key: &str) -> String {
    scalar_string(record.get(key))
}

/// First non-empty of several candidate keys.
pub fn text_any(record: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| text(record, k))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Record id: `_id`, falling back to `id`, always as a string.
pub fn id(record: &Value) -> String {
    text_any(record, &["_id", "id"])
}

/// Optional string field; empty and non-scalar values are `None`.
pub fn opt_text(record: &Value, key: &str) -> Option<String> {
    let s = text(record, key);
    (!s.is_empty()).then_some(s)
}

/// Array field, or an empty slice.
pub fn list<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    match record.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Array field when present as an array, `None` otherwise.
pub fn opt_list<'a>(record: &'a Value, key: &str) -> Option<&'a [Value]> {
    match record.get(key) {
        Some(Value::Array(items)) => Some(items.as_slice()),
        _ => None,
    }
}

fn scalar_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
