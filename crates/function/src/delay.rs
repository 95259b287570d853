//! `delay`: one deferred invocation with a cancellation handle.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::TimerError;

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// The runtime timer tasks are spawned on.
pub(crate) fn current_runtime() -> Result<Handle, TimerError> {
    Handle::try_current().map_err(|_| TimerError::NoRuntime)
}

/// Handle to a call scheduled with [`delay`].
///
/// Dropping the handle leaves the call scheduled.
#[derive(Debug)]
pub struct DelayHandle {
    state: Arc<AtomicU8>,
    task: JoinHandle<()>,
}

impl DelayHandle {
    /// Prevents the call if it has not started yet.
    ///
    /// Returns `true` only for the cancel that actually stopped it; further
    /// cancels, or a cancel after the call ran, return `false`.
    pub fn cancel(&self) -> bool {
        let stopped = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if stopped {
            self.task.abort();
            debug!("delayed call cancelled");
        }
        stopped
    }

    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::SeqCst) == PENDING
    }

    pub fn has_fired(&self) -> bool {
        self.state.load(Ordering::SeqCst) == FIRED
    }
}

/// Calls `func(args)` once, no earlier than `wait` from now.
///
/// Must be called from within a tokio runtime.
pub fn delay<F, A>(func: F, wait: Duration, args: A) -> Result<DelayHandle, TimerError>
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let runtime = current_runtime()?;
    let state = Arc::new(AtomicU8::new(PENDING));
    let task_state = Arc::clone(&state);
    let deadline = Instant::now() + wait;
    debug!(wait_ms = wait.as_millis() as u64, "delayed call scheduled");
    let task = runtime.spawn(async move {
        sleep_until(deadline).await;
        if task_state
            .compare_exchange(PENDING, FIRED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            debug!("delayed call fired");
            func(args);
        }
    });
    Ok(DelayHandle { state, task })
}
