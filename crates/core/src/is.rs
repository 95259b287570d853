//! Type predicates over [`Value`].
//!
//! Short names so call sites read like `is::str(v)`.

use crate::Value;

pub fn undef(v: &Value) -> bool {
    matches!(v, Value::Undefined)
}

pub fn null(v: &Value) -> bool {
    matches!(v, Value::Null)
}

/// Null or undefined.
pub fn nil(v: &Value) -> bool {
    v.is_nullish()
}

pub fn bool(v: &Value) -> bool {
    matches!(v, Value::Bool(_))
}

pub fn num(v: &Value) -> bool {
    matches!(v, Value::Number(_))
}

/// A finite number without a fractional part.
pub fn int(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
}

pub fn nan(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n.is_nan())
}

pub fn infinite(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n.is_infinite())
}

pub fn str(v: &Value) -> bool {
    matches!(v, Value::String(_))
}

pub fn arr(v: &Value) -> bool {
    matches!(v, Value::Array(_))
}

/// Anything with a length: arrays and strings.
pub fn array_like(v: &Value) -> bool {
    matches!(v, Value::Array(_) | Value::String(_))
}

pub fn func(v: &Value) -> bool {
    matches!(v, Value::Function(_))
}

pub fn obj(v: &Value) -> bool {
    matches!(v, Value::Object(_))
}

/// A plain object: no delegation base.
pub fn hash(v: &Value) -> bool {
    matches!(v, Value::Object(o) if o.proto().is_none())
}

/// Nullish, zero-length, or an object without own keys.
pub fn empty(v: &Value) -> bool {
    match v {
        Value::Undefined | Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

/// `key` is an own key of `v` (an in-bounds index for arrays).
pub fn owns(v: &Value, key: &str) -> bool {
    match v {
        Value::Object(obj) => obj.contains_own(key),
        Value::Array(arr) => key.parse::<usize>().is_ok_and(|i| i < arr.len()),
        _ => false,
    }
}
