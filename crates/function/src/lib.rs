//! min-util-function: wrappers that change how a function is invoked.
//!
//! - [`bind`] / [`bind_method`]: fixed `this` and leading arguments.
//! - [`inherits`]: prototype delegation between constructors.
//! - [`before`] / [`once`] / [`after`]: call-count limits.
//! - [`delay`] / [`debounce`] / [`throttle`]: timer-based deferral on the
//!   ambient tokio runtime.
//!
//! Each wrapper owns its state; two wraps of the same function never share
//! counters or timers.

mod bind;
mod count;
mod debounce;
mod delay;
mod error;
mod inherits;
mod throttle;

pub use bind::{bind, bind_method, SharedObj};
pub use count::{after, before, once, After, Before, Once};
pub use debounce::{debounce, Debounced};
pub use delay::{delay, DelayHandle};
pub use error::{BindError, InheritError, TimerError};
pub use inherits::inherits;
pub use throttle::{throttle, Throttled};
