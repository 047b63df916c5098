use std::time::{Duration, Instant};

/// Coalesces bursts of terminal resize events into a single remeasure.
///
/// Only the most recent size is kept; it is released once `delay` has passed
/// without another resize. A zero delay releases every size immediately.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<((u16, u16), Instant)>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, size: (u16, u16), now: Instant) -> Option<(u16, u16)> {
        if self.delay.is_zero() {
            self.pending = None;
            return Some(size);
        }
        self.pending = Some((size, now + self.delay));
        None
    }

    pub fn poll(&mut self, now: Instant) -> Option<(u16, u16)> {
        match self.pending {
            Some((size, deadline)) if now >= deadline => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
