//! `debounce`: one invocation per quiet period.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::delay::current_runtime;
use crate::TimerError;

struct State<A> {
    args: Option<A>,
    task: Option<JoinHandle<()>>,
    /// Bumped on every reschedule; a timer task holding an older value is
    /// stale and must not fire.
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
    fn fire(&self, generation: u64) {
        let args = {
            let mut state = self.state.lock();
            if state.generation != generation {
                return;
            }
            state.task = None;
            state.args.take()
        };
        if let Some(args) = args {
            debug!(generation, "debounced call fired");
            let mut func = self.func.lock();
            (*func)(args);
        }
    }

    /// Drops the pending call, returning its arguments.
    fn take_pending(&self) -> Option<A> {
        let mut state = self.state.lock();
        let args = state.args.take();
        if args.is_some() {
            state.generation += 1;
            if let Some(task) = state.task.take() {
                task.abort();
            }
        }
        args
    }
}

/// A debounced function; see [`debounce`].
///
/// Clones share the same timer and pending arguments.
pub struct Debounced<F, A> {
    inner: Arc<Inner<F, A>>,
}

impl<F, A> Clone for Debounced<F, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, A> Debounced<F, A>
where
    F: FnMut(A) + Send + 'static,
    A: Send + 'static,
{
    /// Records `args` and restarts the timer; the wrapped function runs
    /// `wait` after the last call with the last call's arguments.
    pub fn call(&self, args: A) {
        let mut state = self.inner.state.lock();
        state.generation += 1;
        let generation = state.generation;
        state.args = Some(args);
        if let Some(task) = state.task.take() {
            task.abort();
        }
        let deadline = Instant::now() + self.inner.wait;
        let inner = Arc::clone(&self.inner);
        state.task = Some(self.inner.runtime.spawn(async move {
            sleep_until(deadline).await;
            inner.fire(generation);
        }));
        debug!(
            wait_ms = self.inner.wait.as_millis() as u64,
            generation, "debounced call rescheduled"
        );
    }

    /// Drops the pending call. Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        let cancelled = self.inner.take_pending().is_some();
        if cancelled {
            debug!("debounced call cancelled");
        }
        cancelled
    }

    /// Runs the pending call now instead of waiting. Returns `true` if one
    /// was pending.
    pub fn flush(&self) -> bool {
        match self.inner.take_pending() {
            Some(args) => {
                debug!("debounced call flushed");
                let mut func = self.inner.func.lock();
                (*func)(args);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().args.is_some()
    }
}

/// Wraps `func` so bursts of calls collapse into one invocation, `wait`
/// after the burst ends, using the final call's arguments.
///
/// Must be called from within a tokio runtime.
pub fn debounce<F, A>(func: F, wait: Duration) -> Result<Debounced<F, A>, TimerError>
where
    F: FnMut(A) + Send + 'static,
    A: Send + 'static,
{
    Ok(Debounced {
        inner: Arc::new(Inner {
            wait,
            runtime: current_runtime()?,
            func: Mutex::new(func),
            state: Mutex::new(State {
                args: None,
                task: None,
                generation: 0,
            }),
        }),
    })
}
