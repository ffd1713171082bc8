//! Debounce policy for callers of [`crate::metrics::analyze`].
//!
//! Analysis is cheap but callers that re-run it on every edit should wait
//! until input has been stable for a while. [`Debouncer`] keeps the latest
//! pending input and releases it once no newer input has arrived for the
//! configured delay. A value replaced before its delay elapses is dropped
//! without ever being released.
//!
//! Time is passed in by the caller so the policy can be driven by a real
//! clock or by tests.

use std::time::{Duration, Instant};

/// Default quiet period before pending input is released.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds at most one pending value until input settles.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    last_change: Option<Instant>,
    superseded: usize,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_change: None,
            superseded: 0,
        }
    }

    /// The configured quiet period.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record new input at `now`, replacing any pending value.
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.replace(value).is_some() {
            self.superseded += 1;
            tracing::trace!(superseded = self.superseded, "pending input replaced");
        }
        self.last_change = Some(now);
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_change = None;
    }

    /// Whether a value is waiting for its delay to elapse.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of pending values dropped because newer input replaced them.
    pub const fn superseded(&self) -> usize {
        self.superseded
    }

    /// When the pending value becomes ready, or `None` if nothing is pending.
    pub fn deadline(&self) -> Option<Instant> {
        if self.pending.is_none() {
            return None;
        }
        self.last_change.map(|last| last + self.delay)
    }

    /// Release the pending value if it has been stable for the full delay.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.last_change = None;
        self.pending.take()
    }
}
