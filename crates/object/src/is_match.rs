//! Partial matching of one object against another.

use min_util_core::Value;

/// `true` iff every own key of `source` resolves in `obj` to an equal value.
///
/// Comparison is shallow: each value is compared with `==` (strict for
/// primitives). `Undefined` and `Null` on either side stand for an empty
/// mapping, so an absent `source` always matches and an absent `obj` only
/// matches an empty `source`. Keys of `obj` may be inherited.
pub fn is_match(obj: &Value, source: &Value) -> bool {
    let source = match source {
        Value::Object(o) => o,
        _ => return true,
    };
    if source.is_empty() {
        return true;
    }
    let obj = match obj {
        Value::Object(o) => o,
        _ => return false,
    };
    source
        .iter()
        .all(|(key, expected)| obj.get(key).is_some_and(|actual| actual == *expected))
}
