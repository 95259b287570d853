//! Object-manipulation matrix: extend, mapObject, get, has, only, create,
//! keys, values, functions, defaults, isMatch, toPlainObject and pick.

use min_util_core::{is, noop, Ctor, Key, Obj, Value};
use min_util_object::{
    create, defaults, extend, functions, get, has, is_match, keys, map_object, only, pick,
    to_plain_object, values, Pick,
};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ---------------------------------------------------------------------------
// extend
// ---------------------------------------------------------------------------

#[test]
fn extend_basic_skips_undefined() {
    let mut a = v(json!({"a": 1, "b": 2}));
    let ptr: *const Value = &a;
    let sources = [
        Value::from(Obj::new().with("b", 3).with("c", Value::Undefined)),
        v(json!({"d": 5})),
    ];
    let ret = extend(&mut a, &sources);
    assert!(std::ptr::eq(ret, ptr));
    assert_eq!(a, v(json!({"a": 1, "b": 3, "d": 5})));
    assert!(!has(&a, "c"));
}

#[test]
fn extend_without_sources_returns_first() {
    for first in [v(json!(0)), Value::Null, v(json!({})), v(json!(false))] {
        let mut target = first.clone();
        assert_eq!(*extend(&mut target, &[]), first);
    }
}

#[test]
fn extend_null_target_does_not_crash() {
    let mut target = Value::Null;
    let ret = extend(&mut target, &[v(json!({"foo": true}))]);
    assert_eq!(*ret, Value::Null);
}

#[test]
fn extend_later_sources_win() {
    let mut target = v(json!({}));
    extend(&mut target, &[v(json!({"k": 1})), v(json!({"k": 2})), v(json!({"k": 3}))]);
    assert_eq!(target, v(json!({"k": 3})));
}

#[test]
fn extend_works_on_self() {
    struct Holder {
        this: Value,
    }
    impl Holder {
        fn add(&mut self, val: Value) {
            extend(&mut self.this, &[val]);
        }
    }
    let mut holder = Holder { this: v(json!({})) };
    holder.add(v(json!({"foo": true})));
    assert_eq!(get(&holder.this, Some(&[Key::from("foo")][..])), Some(Value::Bool(true)));
}

// ---------------------------------------------------------------------------
// mapObject
// ---------------------------------------------------------------------------

#[test]
fn map_object_builds_new_object() {
    let raw = v(json!({"a": 1, "b": 2}));
    let ret = map_object(&raw, |val, key, obj| {
        assert_eq!(obj, &raw);
        assert_eq!(obj.as_obj().and_then(|o| o.get(key)), Some(val.clone()));
        Value::from(val.as_f64().unwrap_or(0.0) * 2.0)
    });
    assert_eq!(Value::from(ret), v(json!({"a": 2, "b": 4})));
    assert_eq!(raw, v(json!({"a": 1, "b": 2})));
}

#[test]
fn map_object_of_null_is_empty() {
    let ret = map_object(&Value::Null, |val, _, _| val.clone());
    assert!(ret.is_empty());
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn get_value_at_path() {
    let obj = v(json!({"a": [{"b": {"c": 3}}]}));
    let path = [Key::from("a"), Key::from(0), Key::from("b"), Key::from("c")];
    assert_eq!(get(&obj, Some(&path[..])), Some(Value::from(3)));

    let too_deep = [
        Key::from("a"),
        Key::from(0),
        Key::from("b"),
        Key::from("c"),
        Key::from("x"),
    ];
    assert_eq!(get(&obj, Some(&too_deep[..])), None);
    assert_eq!(get(&obj, Some(&[Key::from("x")][..])), None);
    assert_eq!(get(&obj, None), None);
}

#[test]
fn get_follows_delegation_chain() {
    let ctor = Ctor::new("Config");
    ctor.prototype_mut().insert("retries", 3);
    let obj = Value::from(ctor.construct());
    assert_eq!(get(&obj, Some(&[Key::from("retries")][..])), Some(Value::from(3)));
}

// ---------------------------------------------------------------------------
// has / keys / values
// ---------------------------------------------------------------------------

#[test]
fn has_is_own_key_check() {
    assert!(has(&v(json!({"a": 1})), "a"));
    assert!(!has(&v(json!({"a": 1})), "b"));
    assert!(!has(&Value::Null, "a"));
}

#[test]
fn keys_skip_inherited() {
    let ctor = Ctor::new("Ctor");
    ctor.prototype_mut().insert("foo", "bar");
    let mut hash = ctor.construct();
    hash.insert("key", "val");
    let hash = Value::from(hash);

    assert_eq!(keys(&hash), vec!["key"]);
    assert_eq!(values(&hash), vec![&Value::from("val")]);
    assert!(has(&hash, "key"));
    assert!(!has(&hash, "foo"));
}

#[test]
fn values_in_key_order() {
    let obj = v(json!({"a": 1, "b": 2}));
    assert_eq!(values(&obj), vec![&Value::from(1), &Value::from(2)]);
}

// ---------------------------------------------------------------------------
// only
// ---------------------------------------------------------------------------

#[test]
fn only_supports_string() {
    let obj = v(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
    assert_eq!(Value::from(only(&obj, "a c     d")), v(json!({"a": 1, "c": 3, "d": 4})));
}

#[test]
fn only_supports_list() {
    let obj = v(json!({"a": 1, "b": 2}));
    assert_eq!(Value::from(only(&obj, ["b", "z"])), v(json!({"b": 2})));
    assert_eq!(
        Value::from(only(&obj, vec!["a".to_string()])),
        v(json!({"a": 1}))
    );
}

// ---------------------------------------------------------------------------
// create / toPlainObject
// ---------------------------------------------------------------------------

#[test]
fn create_null_has_no_keys() {
    let ret = Value::from(create(None));
    assert!(keys(&ret).is_empty());
}

#[test]
fn create_inherits_from_proto() {
    let proto = Obj::new().with("x", 1).into_proto();
    let ret = Value::from(create(Some(&proto)));
    assert!(keys(&ret).is_empty());
    assert_eq!(get(&ret, Some(&[Key::from("x")][..])), Some(Value::from(1)));
}

#[test]
fn to_plain_object_strips_proto() {
    let ctor = Ctor::new("Ctor");
    ctor.prototype_mut().insert("bar", "2");
    let mut instance = ctor.construct();
    instance.insert("foo", 1);

    let ret = to_plain_object(&Value::from(instance));
    assert!(ret.proto().is_none());
    assert_eq!(Value::from(ret.clone()), v(json!({"foo": 1})));
    assert_eq!(ret.get("bar"), None);
}

// ---------------------------------------------------------------------------
// functions
// ---------------------------------------------------------------------------

#[test]
fn functions_lists_callable_keys() {
    let obj = Value::from(Obj::new().with("a", 1).with("b", noop()).with("c", noop()));
    assert_eq!(functions(&obj), vec!["b", "c"]);
}

// ---------------------------------------------------------------------------
// defaults
// ---------------------------------------------------------------------------

#[test]
fn defaults_fill_only_undefined() {
    let mut target = Value::from(
        Obj::new()
            .with("foo", "bar")
            .with("foo1", Value::Undefined)
            .with("foo2", Value::Null),
    );
    let ptr: *const Value = &target;
    let sources = [
        v(json!({"foo": "bar2", "foo1": "foo1"})),
        v(json!({"foo3": "foo3", "foo2": "foo2"})),
    ];
    let ret = defaults(&mut target, &sources);
    assert!(std::ptr::eq(ret, ptr));
    assert_eq!(
        target,
        v(json!({"foo": "bar", "foo1": "foo1", "foo2": null, "foo3": "foo3"}))
    );
}

#[test]
fn defaults_first_source_wins() {
    let mut target = v(json!({}));
    defaults(&mut target, &[v(json!({"k": 1})), v(json!({"k": 2}))]);
    assert_eq!(target, v(json!({"k": 1})));
}

// ---------------------------------------------------------------------------
// isMatch
// ---------------------------------------------------------------------------

#[test]
fn is_match_matrix() {
    assert!(is_match(&v(json!({"a": 1})), &v(json!({"a": 1}))));
    assert!(is_match(&v(json!({"a": 1, "b": 2})), &v(json!({"a": 1}))));
    assert!(is_match(&Value::Undefined, &Value::Undefined));
    assert!(is_match(&Value::Null, &Value::Undefined));
    assert!(is_match(&Value::Null, &v(json!({}))));
    assert!(!is_match(&Value::Null, &v(json!({"a": 1}))));
    assert!(!is_match(&v(json!({"a": 1})), &v(json!({"a": 2}))));
}

#[test]
fn is_match_is_shallow_but_structural_for_containers() {
    let obj = v(json!({"a": {"x": 1}, "b": 2}));
    assert!(is_match(&obj, &v(json!({"a": {"x": 1}}))));
    assert!(!is_match(&obj, &v(json!({"a": {"x": 1, "y": 2}}))));
}

// ---------------------------------------------------------------------------
// pick
// ---------------------------------------------------------------------------

#[test]
fn pick_acts_like_filter() {
    let obj = v(json!({"foo": "bar", "foo2": 2}));
    let ret = pick(&obj, Pick::by(|val, _, _| is::str(val)));
    assert_eq!(Value::from(ret), v(json!({"foo": "bar"})));
}

#[test]
fn pick_direct_key() {
    let obj = v(json!({"foo": "bar", "foo2": 2}));
    assert_eq!(Value::from(pick(&obj, "foo")), v(json!({"foo": "bar"})));
}
