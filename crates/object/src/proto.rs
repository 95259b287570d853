//! Delegation helpers: `create`, `create_with`, `to_plain_object`.

use min_util_core::{Obj, Proto, Value};

/// A new empty object whose delegation base is `proto`.
///
/// With `None` the object inherits nothing at all.
pub fn create(proto: Option<&Proto>) -> Obj {
    Obj::with_proto(proto.cloned())
}

/// Like [`create`], then copies the own keys of `props` onto the result.
pub fn create_with(proto: Option<&Proto>, props: &Value) -> Obj {
    let mut obj = create(proto);
    if let Some(props) = props.as_obj() {
        for (key, val) in props {
            obj.insert(key.clone(), val.clone());
        }
    }
    obj
}

/// A new plain object holding only the own keys of `obj`.
///
/// The delegation base is dropped; non-objects yield an empty object.
pub fn to_plain_object(obj: &Value) -> Obj {
    match obj {
        Value::Object(o) => o.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => Obj::new(),
    }
}
