//! min-util-core: the value model shared by the min-util helpers.
//!
//! The helpers operate on loosely typed key/value data, so this crate
//! provides a small dynamic [`Value`] type:
//!
//! - [`Obj`] keeps its *own* keys in insertion order and may delegate
//!   lookups to a shared, lockable base object (its prototype, a [`Proto`]).
//! - [`Func`] is a shared callable taking a `this` value and arguments.
//! - [`Ctor`] owns a prototype and answers "is instance of" through the
//!   [`InstanceOf`] trait.
//! - [`is`] holds the type predicates used across the other crates.

mod ctor;
mod func;
mod key;
mod obj;
mod value;

pub mod is;

pub use ctor::{Ctor, InstanceOf};
pub use func::{noop, Func};
pub use key::Key;
pub use obj::{Obj, Proto};
pub use value::Value;
