//! Selection and mapping: `map_object`, `only`, `pick`.

use std::fmt;

use min_util_core::{Obj, Value};

/// A new object with the same own keys, each value replaced by
/// `f(value, key, obj)`. Non-objects map to an empty object.
pub fn map_object<F>(obj: &Value, mut f: F) -> Obj
where
    F: FnMut(&Value, &str, &Value) -> Value,
{
    match obj {
        Value::Object(o) => o
            .iter()
            .map(|(key, val)| (key.clone(), f(val, key, obj)))
            .collect(),
        _ => Obj::new(),
    }
}

/// A list of key names, given as a list or as one delimited string.
///
/// Strings are split on whitespace and commas; empty pieces are dropped, so
/// `"a c     d"` and `"a, c,d"` both name `a`, `c` and `d`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyList(Vec<String>);

impl KeyList {
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for KeyList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for KeyList {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Vec<String>> for KeyList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<&[&str]> for KeyList {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyList {
    fn from(value: [&str; N]) -> Self {
        Self(value.iter().map(|s| s.to_string()).collect())
    }
}

/// A new object with only the listed keys that are present on `obj`.
///
/// Presence follows the delegation chain; a key holding `Undefined` is
/// treated as absent. Explicit `Null` is kept.
pub fn only(obj: &Value, keys: impl Into<KeyList>) -> Obj {
    let keys = keys.into();
    let Some(source) = obj.as_obj() else {
        return Obj::new();
    };
    let mut out = Obj::new();
    for key in keys.as_slice() {
        if let Some(val) = source.get(key).filter(|v| !v.is_undefined()) {
            out.insert(key.clone(), val);
        }
    }
    out
}

type Predicate<'a> = dyn FnMut(&Value, &str, &Value) -> bool + 'a;

/// How [`pick`] selects entries: a single key, or a predicate over
/// `(value, key, obj)`.
pub enum Pick<'a> {
    Key(String),
    Predicate(Box<Predicate<'a>>),
}

impl<'a> Pick<'a> {
    pub fn by<F>(predicate: F) -> Self
    where
        F: FnMut(&Value, &str, &Value) -> bool + 'a,
    {
        Self::Predicate(Box::new(predicate))
    }
}

impl fmt::Debug for Pick<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pick::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Pick::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Pick<'_> {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for Pick<'_> {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

/// Filters the own entries of `obj`.
///
/// With a predicate, keeps entries where `predicate(value, key, obj)` holds.
/// With a key, returns a one-entry object if that key is present (through the
/// delegation chain, not `Undefined`) and an empty one otherwise.
pub fn pick<'a>(obj: &Value, how: impl Into<Pick<'a>>) -> Obj {
    let Some(source) = obj.as_obj() else {
        return Obj::new();
    };
    match how.into() {
        Pick::Key(key) => {
            let found = source.get(&key).filter(|v| !v.is_undefined());
            match found {
                Some(val) => Obj::new().with(key, val),
                None => Obj::new(),
            }
        }
        Pick::Predicate(mut predicate) => source
            .iter()
            .filter(|(key, val)| predicate(val, key, obj))
            .map(|(key, val)| (key.clone(), val.clone()))
            .collect(),
    }
}
