//! Trailing-edge debounce for resize events.

use std::time::{Duration, Instant};

/// Quiet period before a resize burst is acted upon.
pub const RESIZE_QUIET: Duration = Duration::from_millis(10);

/// Holds the latest value of a burst until no new value arrives for the
/// quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a value, replacing anything still pending.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(
            &self.pending,
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet
        );
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Time left until the pending value fires, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.quiet.saturating_sub(now.saturating_duration_since(*at)))
    }
}
