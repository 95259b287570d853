//! Ctor: constructors with a shared prototype.

use std::sync::Arc;

use parking_lot::RwLockWriteGuard;

use crate::{Obj, Proto, Value};

/// A constructor: a name plus the prototype every instance delegates to.
///
/// Instances are identified by prototype *identity*, so an object only
/// counts as an instance if its delegation chain contains this very
/// prototype, not merely an equal one. Clones share the prototype.
#[derive(Debug, Clone)]
pub struct Ctor {
    name: String,
    prototype: Proto,
}

impl Ctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prototype: Obj::new().into_proto(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prototype(&self) -> &Proto {
        &self.prototype
    }

    /// Locks the prototype for editing.
    ///
    /// The prototype is edited in place: every instance, including those
    /// created earlier, sees the change and keeps its instance-of answer.
    pub fn prototype_mut(&self) -> RwLockWriteGuard<'_, Obj> {
        self.prototype.write()
    }

    /// Creates an empty instance delegating to the prototype.
    pub fn construct(&self) -> Obj {
        Obj::with_proto(Some(Arc::clone(&self.prototype)))
    }
}

/// "Is instance of" checks against a [`Ctor`].
pub trait InstanceOf {
    fn instance_of(&self, ctor: &Ctor) -> bool;
}

impl InstanceOf for Obj {
    fn instance_of(&self, ctor: &Ctor) -> bool {
        self.delegates_to(ctor.prototype())
    }
}

impl InstanceOf for Value {
    fn instance_of(&self, ctor: &Ctor) -> bool {
        self.as_obj().is_some_and(|obj| obj.instance_of(ctor))
    }
}
