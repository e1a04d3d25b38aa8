//! Debouncing of rapidly changing input.
//!
//! Every [`Debouncer::push`] cancels whatever was pending and arms a new
//! deadline, handing back a [`DebounceToken`]. Only the newest token can ever
//! deliver its value, and only once the quiescence window has passed, so
//! superseded values are dropped rather than queued.
//!
//! The debouncer owns no timer. The event loop asks for [`Debouncer::deadline`],
//! sleeps until then (or until the next input) and calls [`Debouncer::fire`]
//! or [`Debouncer::poll`].

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
    token: DebounceToken,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    /// Replaces any pending value with `value`, due `window` after `now`.
    pub fn push(&mut self, value: T, now: Instant) -> DebounceToken {
        self.generation += 1;
        let token = DebounceToken(self.generation);
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
            token,
        });
        token
    }

    /// Delivers the pending value if `token` is still the current one and
    /// its deadline has passed.
    pub fn fire(&mut self, token: DebounceToken, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some(p) if p.token == token && now >= p.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Delivers the pending value, whatever its token, once it is due.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let token = self.pending.as_ref()?.token;
        self.fire(token, now)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
