//! Call-count wrappers: `before`, `once`, `after`.

/// Runs the wrapped function for the first `n - 1` calls only.
///
/// Later calls return the last result without invoking it; the function is
/// dropped once it can no longer run.
pub struct Before<F, R> {
    remaining: usize,
    func: Option<F>,
    last: Option<R>,
}

/// A [`Before`] that runs exactly once.
pub type Once<F, R> = Before<F, R>;

impl<F, R: Clone> Before<F, R> {
    pub fn call<A>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.remaining > 1 {
            self.remaining -= 1;
            if let Some(func) = self.func.as_mut() {
                self.last = Some(func(args));
            }
        }
        if self.remaining <= 1 {
            self.func = None;
        }
        self.last.clone()
    }

    /// `true` once the wrapped function will never run again.
    pub fn is_spent(&self) -> bool {
        self.func.is_none() || self.remaining <= 1
    }
}

/// Wraps `func` so it runs on the first `n - 1` calls; `n <= 1` never runs it.
pub fn before<F, R>(n: usize, func: F) -> Before<F, R> {
    Before {
        remaining: n,
        func: Some(func),
        last: None,
    }
}

/// Wraps `func` so it runs on the first call only.
pub fn once<F, R>(func: F) -> Once<F, R> {
    before(2, func)
}

/// Forwards to the wrapped function from the `n`-th call on.
pub struct After<F> {
    remaining: usize,
    func: F,
}

impl<F> After<F> {
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }
        Some((self.func)(args))
    }
}

/// Wraps `func` so calls `1..n` are no-ops; `n <= 1` forwards every call.
pub fn after<F>(n: usize, func: F) -> After<F> {
    After { remaining: n, func }
}
