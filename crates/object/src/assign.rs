//! In-place assignment: `extend` and `defaults`.

use min_util_core::Value;

/// Copies own keys of each object source into `target`, left to right.
///
/// Later sources override earlier ones; source entries holding
/// `Undefined` are skipped so they never clobber an existing value.
/// Returns the same `target` it was given. A non-object target is returned
/// untouched, and non-object sources are ignored.
pub fn extend<'a>(target: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    if let Some(obj) = target.as_obj_mut() {
        for source in sources.iter().filter_map(Value::as_obj) {
            for (key, val) in source {
                if val.is_undefined() {
                    continue;
                }
                obj.insert(key.clone(), val.clone());
            }
        }
    }
    target
}

/// Fills keys of `target` whose current value is missing or `Undefined`.
///
/// Explicit `Null` counts as a value and is kept. Once a key has been filled
/// (by `target` itself or an earlier source) later sources do not override
/// it. Inherited values count as present.
pub fn defaults<'a>(target: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    if let Some(obj) = target.as_obj_mut() {
        for source in sources.iter().filter_map(Value::as_obj) {
            for (key, val) in source {
                let unset = obj.get(key).map_or(true, |v| v.is_undefined());
                if unset && !val.is_undefined() {
                    obj.insert(key.clone(), val.clone());
                }
            }
        }
    }
    target
}
