//! Func: a shared callable value.

use std::fmt;
use std::sync::Arc;

use crate::Value;

type Callable = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

/// A callable value: receives the `this` value and the call arguments.
///
/// Cloning is cheap and keeps identity, so two clones compare equal while two
/// separately created functions never do.
#[derive(Clone)]
pub struct Func(Arc<Callable>);

impl Func {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.0)(this, args)
    }

    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// A function that ignores its arguments and returns `Undefined`.
pub fn noop() -> Func {
    Func::new(|_, _| Value::Undefined)
}
