//! Obj: an ordered key/value mapping with an optional delegation base.

use std::sync::Arc;

use indexmap::map::Iter;
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::Value;

/// A delegation base shared by every object that inherits from it.
///
/// Edits made through the lock are seen by all delegating objects, and the
/// `Arc` pointer is the prototype's identity.
pub type Proto = Arc<RwLock<Obj>>;

/// A string-keyed mapping.
///
/// Keys assigned directly on the object are its *own* keys and keep
/// insertion order. Lookups that miss fall through to the delegation base
/// (`proto`), which is shared and never copied into the object.
#[derive(Debug, Clone, Default)]
pub struct Obj {
    own: IndexMap<String, Value>,
    proto: Option<Proto>,
}

impl Obj {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty object delegating to `proto`.
    pub fn with_proto(proto: Option<Proto>) -> Self {
        Self {
            own: IndexMap::new(),
            proto,
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.own.insert(key.into(), value.into());
        self
    }

    /// Wraps the object so others can delegate to it.
    pub fn into_proto(self) -> Proto {
        Arc::new(RwLock::new(self))
    }

    pub fn proto(&self) -> Option<&Proto> {
        self.proto.as_ref()
    }

    pub fn set_proto(&mut self, proto: Option<Proto>) {
        self.proto = proto;
    }

    /// The delegation chain, nearest base first.
    pub fn protos(&self) -> Vec<Proto> {
        let mut chain = Vec::new();
        let mut next = self.proto.clone();
        while let Some(proto) = next {
            next = proto.read().proto.clone();
            chain.push(proto);
        }
        chain
    }

    /// `true` if `proto` appears anywhere on the delegation chain.
    pub fn delegates_to(&self, proto: &Proto) -> bool {
        self.protos().iter().any(|p| Arc::ptr_eq(p, proto))
    }

    /// Sets an own key, returning the previous own value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.own.insert(key.into(), value.into())
    }

    /// Removes an own key. Inherited keys are untouched.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.own.shift_remove(key)
    }

    /// Looks `key` up on the object, then along the delegation chain.
    ///
    /// Inherited values live behind the base's lock, so the result is a
    /// copy; use [`Obj::get_own`] to borrow an own value.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(val) = self.own.get(key) {
            return Some(val.clone());
        }
        let mut next = self.proto.clone();
        while let Some(proto) = next {
            let base = proto.read();
            if let Some(val) = base.own.get(key) {
                return Some(val.clone());
            }
            next = base.proto.clone();
        }
        None
    }

    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.own.get(key)
    }

    pub fn contains_own(&self, key: &str) -> bool {
        self.own.contains_key(key)
    }

    /// `key in obj`: own or inherited.
    pub fn contains(&self, key: &str) -> bool {
        self.contains_own(key) || self.protos().iter().any(|p| p.read().contains_own(key))
    }

    pub fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.own.keys().map(String::as_str)
    }

    /// Own entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.own.iter()
    }

    pub fn len(&self) -> usize {
        self.own.len()
    }

    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }
}

/// Compares own entries only, ignoring order and delegation bases.
impl PartialEq for Obj {
    fn eq(&self, other: &Self) -> bool {
        self.own == other.own
    }
}

impl FromIterator<(String, Value)> for Obj {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            own: iter.into_iter().collect(),
            proto: None,
        }
    }
}

impl<'a> IntoIterator for &'a Obj {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.own.iter()
    }
}
