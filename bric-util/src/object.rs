//! Property helpers over JSON object values.
//!
//! Lookup probes answer gracefully for non-objects; the comparing and
//! transforming helpers require an object and reject anything else with
//! [`Error::InvalidArgument`](bric_core::Error).

use bric_core::{Error, Result};
use serde_json::{Map, Value};

/// True when `value` is an object with `key` among its own entries.
///
/// # Example
///
/// ```
/// use bric_util::has_own;
/// use serde_json::json;
///
/// assert!(has_own(&json!({"name": "John"}), "name"));
/// assert!(!has_own(&json!({"name": "John"}), "missing"));
/// assert!(!has_own(&json!("not an object"), "name"));
/// ```
pub fn has_own(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

/// Gets the entry for `key`, or `None` when it is missing or `value` is
/// not an object.
pub fn get_own<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

/// Compares two objects and returns the keys of `a` whose values differ
/// in `b`, in `a`'s key order. A key missing from `b` counts as
/// changed.
///
/// # Example
///
/// ```
/// use bric_util::changed_keys;
/// use serde_json::json;
///
/// let before = json!({"name": "John", "age": 30, "city": "NYC"});
/// let after = json!({"name": "John", "age": 31, "city": "NYC"});
/// assert_eq!(changed_keys(&before, &after).unwrap(), vec!["age"]);
/// ```
pub fn changed_keys(a: &Value, b: &Value) -> Result<Vec<String>> {
    let a = as_object(a)?;
    let b = as_object(b)?;
    Ok(a.iter()
        .filter(|&(key, value)| b.get(key.as_str()) != Some(value))
        .map(|(key, _)| key.clone())
        .collect())
}

/// Returns a copy of the object with `keys` removed; the remaining
/// entries keep their order.
pub fn omit(value: &Value, keys: &[&str]) -> Result<Value> {
    let mut map = as_object(value)?.clone();
    for key in keys {
        map.shift_remove(*key);
    }
    Ok(Value::Object(map))
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_argument("expected an object value"))
}
