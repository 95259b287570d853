//! Prototype delegation between constructors.

use std::sync::Arc;

use min_util_core::Ctor;
use tracing::debug;

use crate::InheritError;

/// Makes `child`'s prototype delegate to `parent`'s prototype, so instances
/// of `child` are also instances of `parent`.
///
/// `parent` is never constructed and keys already on `child`'s prototype
/// stay in place. The link is made on the shared prototype, so instances of
/// `child` created earlier pick it up too, and later edits to either
/// prototype are seen through it. Linking a constructor to itself or to one
/// of its own descendants is rejected.
pub fn inherits(child: &Ctor, parent: &Ctor) -> Result<(), InheritError> {
    let looped = Arc::ptr_eq(child.prototype(), parent.prototype())
        || parent.prototype().read().delegates_to(child.prototype());
    if looped {
        return Err(InheritError::Cycle {
            child: child.name().to_string(),
            parent: parent.name().to_string(),
        });
    }
    let base = Arc::clone(parent.prototype());
    child.prototype_mut().set_proto(Some(base));
    debug!(child = child.name(), parent = parent.name(), "prototype linked");
    Ok(())
}
