//! Read access: `get`, `has`, `keys`, `values`, `functions`.

use min_util_core::{Key, Value};

/// Walks `path` into nested objects and arrays.
///
/// Object steps resolve through the delegation chain; array steps accept
/// indices and numeric names. Returns `None` as soon as a step is missing
/// or lands on something that cannot be walked into, when `path` itself is
/// absent, or when the value found is `Undefined`. An empty path yields
/// a copy of `obj`.
pub fn get(obj: &Value, path: Option<&[Key]>) -> Option<Value> {
    let path = path?;
    let mut current = obj.clone();
    for key in path {
        current = match &current {
            Value::Object(o) => o.get(&key.as_name())?,
            Value::Array(arr) => arr.get(key.as_index()?)?.clone(),
            _ => return None,
        };
    }
    Some(current).filter(|v| !v.is_undefined())
}

/// `true` iff `key` is an own key of `obj` (an in-bounds index for arrays).
pub fn has(obj: &Value, key: &str) -> bool {
    min_util_core::is::owns(obj, key)
}

/// Own keys in insertion order; array indices for arrays.
pub fn keys(obj: &Value) -> Vec<String> {
    match obj {
        Value::Object(o) => o.own_keys().map(str::to_string).collect(),
        Value::Array(arr) => (0..arr.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Own values in the same order as [`keys`].
pub fn values(obj: &Value) -> Vec<&Value> {
    match obj {
        Value::Object(o) => o.iter().map(|(_, v)| v).collect(),
        Value::Array(arr) => arr.iter().collect(),
        _ => Vec::new(),
    }
}

/// Own keys whose value is a function, in insertion order.
pub fn functions(obj: &Value) -> Vec<String> {
    match obj {
        Value::Object(o) => o
            .iter()
            .filter(|(_, v)| min_util_core::is::func(v))
            .map(|(k, _)| k.clone())
            .collect(),
        _ => Vec::new(),
    }
}
