//! min-util: a utility belt of small, independent helpers.
//!
//! Re-exports the member crates under one roof:
//!
//! - [`min_util_core`]: the [`Value`] model and the [`is`] predicates.
//! - [`min_util_function`]: `bind`, `inherits`, `before`, `once`, `after`,
//!   `delay`, `debounce`, `throttle`.
//! - [`min_util_object`]: `extend`, `map_object`, `get`, `has`, `only`,
//!   `create`, `keys`, `values`, `functions`, `defaults`, `is_match`,
//!   `to_plain_object`, `pick`.
//!
//! ```
//! use min_util::{extend, get, Key, Value};
//! use serde_json::json;
//!
//! let mut target = Value::from(json!({"a": 1}));
//! extend(&mut target, &[Value::from(json!({"b": {"c": 2}}))]);
//! let path = [Key::from("b"), Key::from("c")];
//! assert_eq!(get(&target, Some(&path[..])), Some(Value::from(2)));
//! ```

pub use min_util_core::{is, noop, Ctor, Func, InstanceOf, Key, Obj, Proto, Value};
pub use min_util_function::{
    after, before, bind, bind_method, debounce, delay, inherits, once, throttle, After, Before,
    BindError, DelayHandle, Debounced, InheritError, Once, SharedObj, Throttled, TimerError,
};
pub use min_util_object::{
    create, create_with, defaults, extend, functions, get, has, is_match, keys, map_object, only,
    pick, to_plain_object, values, KeyList, Pick,
};
