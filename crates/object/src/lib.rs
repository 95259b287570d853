//! min-util-object: helpers that read or shallowly mutate key/value data.
//!
//! Every function accepts any [`Value`] and degrades to a no-op or an empty
//! result when handed something that is not an object; nothing here panics
//! on malformed input. Only *own* keys are enumerated unless a function
//! says otherwise.
//!
//! [`Value`]: min_util_core::Value

mod access;
mod assign;
mod is_match;
mod proto;
mod select;

pub use access::{functions, get, has, keys, values};
pub use assign::{defaults, extend};
pub use is_match::is_match;
pub use proto::{create, create_with, to_plain_object};
pub use select::{map_object, only, pick, KeyList, Pick};
