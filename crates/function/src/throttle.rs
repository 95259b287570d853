//! `throttle`: at most one invocation per window, leading and trailing.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use crate::delay::current_runtime;
use crate::TimerError;

struct State<A> {
    /// When the wrapped function last ran.
    last: Option<Instant>,
    /// Arguments of the latest suppressed call.
    trailing: Option<A>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

struct Inner<F, A> {
    wait: Duration,
    runtime: Handle,
    func: Mutex<F>,
    state: Mutex<State<A>>,
}

impl<F, A> Inner<F, A>
where
    F: FnMut(A),
{
    fn invoke(&self, args: A) {
        let mut func = self.func.lock();
        (*func)(args);
    }

    fn fire_trailing(&self, generation: u64) {
        let args = {
            let mut state = self.state.lock();
            if state.generation != generation {
                return;
            }
            state.task = None;
            let args = state.trailing.take();
            if args.is_some() {
                state.last = Some(Instant::now());
            }
            args
        };
        if let Some(args) = args {
            debug!(generation, "throttled call fired on trailing edge");
            self.invoke(args);
        }
    }
}

/// A throttled function; see [`throttle`].
///
/// Clones share the same window and pending arguments.
pub struct Throttled<F, A> {
    inner: Arc<Inner<F, A>>,
}

impl<F, A> Clone for Throttled<F, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, A> Throttled<F, A>
where
    F: FnMut(A) + Send + 'static,
    A: Send + 'static,
{
    /// Runs the wrapped function now if the window is open; otherwise keeps
    /// `args` for the single trailing call at the end of the window.
    pub fn call(&self, args: A) {
        let now = Instant::now();
        let mut state = self.inner.state.lock();
        let open = state.task.is_none()
            && state
                .last
                .map_or(true, |last| now.duration_since(last) >= self.inner.wait);
        if open {
            state.last = Some(now);
            drop(state);
            debug!("throttled call fired on leading edge");
            self.inner.invoke(args);
            return;
        }

        state.trailing = Some(args);
        if state.task.is_some() {
            trace!("throttled call suppressed");
            return;
        }
        let deadline = state.last.map_or(now, |last| last + self.inner.wait);
        state.generation += 1;
        let generation = state.generation;
        let inner = Arc::clone(&self.inner);
        state.task = Some(self.inner.runtime.spawn(async move {
            sleep_until(deadline).await;
            inner.fire_trailing(generation);
        }));
        debug!(
            wait_ms = self.inner.wait.as_millis() as u64,
            generation, "throttled trailing call scheduled"
        );
    }

    /// Drops the pending trailing call. Returns `true` if one was pending.
    ///
    /// The window itself is kept: a call right after `cancel` is still
    /// suppressed until `wait` has passed since the last invocation.
    pub fn cancel(&self) -> bool {
        let mut state = self.inner.state.lock();
        let pending = state.trailing.take().is_some();
        state.generation += 1;
        if let Some(task) = state.task.take() {
            task.abort();
        }
        if pending {
            debug!("throttled trailing call cancelled");
        }
        pending
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().trailing.is_some()
    }
}

/// Wraps `func` so it runs at most once every `wait`.
///
/// The first call runs immediately with its own arguments. Calls inside the
/// window are suppressed, and exactly one trailing invocation runs at the
/// window boundary with the latest suppressed arguments.
///
/// Must be called from within a tokio runtime.
pub fn throttle<F, A>(func: F, wait: Duration) -> Result<Throttled<F, A>, TimerError>
where
    F: FnMut(A) + Send + 'static,
    A: Send + 'static,
{
    Ok(Throttled {
        inner: Arc::new(Inner {
            wait,
            runtime: current_runtime()?,
            func: Mutex::new(func),
            state: Mutex::new(State {
                last: None,
                trailing: None,
                task: None,
                generation: 0,
            }),
        }),
    })
}
