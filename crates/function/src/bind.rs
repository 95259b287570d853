//! `bind` and late-bound `bind_method`.

use std::sync::Arc;

use min_util_core::{Func, Obj, Value};
use parking_lot::RwLock;
use tracing::warn;

use crate::BindError;

/// An object shared between its owner and the methods bound to it.
pub type SharedObj = Arc<RwLock<Obj>>;

enum Target {
    Direct { func: Func, this: Value },
    /// Resolved from `context[name]` on every call.
    Method { context: SharedObj, name: String },
}

struct Bound {
    target: Target,
    partial: Vec<Value>,
}

impl Bound {
    fn invoke(&self, args: &[Value]) -> Value {
        let mut all = Vec::with_capacity(self.partial.len() + args.len());
        all.extend_from_slice(&self.partial);
        all.extend_from_slice(args);

        match &self.target {
            Target::Direct { func, this } => func.call(this, &all),
            Target::Method { context, name } => {
                // Release the lock before calling so the method may take it.
                let (method, this) = {
                    let ctx = context.read();
                    let method = ctx.get(name).and_then(|v| v.as_func().cloned());
                    (method, Value::Object(ctx.clone()))
                };
                match method {
                    Some(method) => method.call(&this, &all),
                    None => {
                        warn!(method = %name, "bound method is no longer callable");
                        Value::Undefined
                    }
                }
            }
        }
    }
}

/// Returns a function calling `func` with `context` as `this` and
/// `partial` in front of the call-time arguments.
pub fn bind(func: &Func, context: impl Into<Value>, partial: Vec<Value>) -> Func {
    let bound = Bound {
        target: Target::Direct {
            func: func.clone(),
            this: context.into(),
        },
        partial,
    };
    Func::new(move |_, args| bound.invoke(args))
}

/// Binds the method stored under `name` on `context`.
///
/// `name` must hold a function when bound. The method is looked up again on
/// each call, so reassigning `context[name]` later changes what runs; `this`
/// is a snapshot of `context` taken at call time.
pub fn bind_method(
    context: &SharedObj,
    name: &str,
    partial: Vec<Value>,
) -> Result<Func, BindError> {
    let is_method = context
        .read()
        .get_own(name)
        .is_some_and(min_util_core::is::func);
    if !is_method {
        return Err(BindError::NotAMethod(name.to_string()));
    }
    let bound = Bound {
        target: Target::Method {
            context: Arc::clone(context),
            name: name.to_string(),
        },
        partial,
    };
    Ok(Func::new(move |_, args| bound.invoke(args)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_with_this() -> Func {
        Func::new(|this, args| {
            let base = this
                .as_obj()
                .and_then(|o| o.get("val"))
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            Value::from(base + args.iter().filter_map(Value::as_f64).sum::<f64>())
        })
    }

    #[test]
    fn partial_args_come_first() {
        let record = Func::new(|_, args| Value::Array(args.to_vec()));
        let bound = bind(&record, Value::Null, vec![Value::from(1), Value::from(2)]);
        assert_eq!(
            bound.call(&Value::Undefined, &[Value::from(3)]),
            Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
    }

    #[test]
    fn call_time_this_is_ignored() {
        let bound = bind(&sum_with_this(), Obj::new().with("val", 1), vec![]);
        let other = Value::from(Obj::new().with("val", 100));
        assert_eq!(bound.call(&other, &[]), Value::from(1));
    }

    #[test]
    fn method_must_exist_when_bound() {
        let ctx: SharedObj = Arc::new(RwLock::new(Obj::new().with("val", 1)));
        assert_eq!(
            bind_method(&ctx, "val", vec![]).unwrap_err(),
            BindError::NotAMethod("val".into())
        );
        assert!(bind_method(&ctx, "missing", vec![]).is_err());
    }

    #[test]
    fn method_removed_after_binding_returns_undefined() {
        let ctx: SharedObj = Arc::new(RwLock::new(Obj::new().with("sum", sum_with_this())));
        let bound = bind_method(&ctx, "sum", vec![]).unwrap();
        ctx.write().remove("sum");
        assert_eq!(bound.call(&Value::Undefined, &[]), Value::Undefined);
    }
}
