//! Scoped handle for the search-buffer inactivity timer.
//!
//! The host runtime owns the real clock. The widget only decides *when* a
//! clear should be scheduled or cancelled, and hands out a [`TimerHandle`]
//! for each schedule. The host reports expiry back with the same handle.
//!
//! Zellij's `set_timeout` cannot be cancelled, so cancellation is
//! generation-based: only the most recently issued handle is live. A handle
//! that fires after being replaced or cancelled is ignored.

use std::fmt;

/// Identifies one scheduled search-buffer clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Returns the handle's generation number.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.generation())
    }
}

/// Tracks the single live inactivity timer.
#[derive(Debug, Clone, Default)]
pub struct SearchTimer {
    next_generation: u64,
    active: Option<TimerHandle>,
}

impl SearchTimer {
    /// Cancels any pending timer and issues a new live handle.
    ///
    /// Returns `(cancelled, scheduled)`.
    pub fn restart(&mut self) -> (Option<TimerHandle>, TimerHandle) {
        let cancelled = self.active.take();
        let handle = TimerHandle(self.next_generation);
        self.next_generation = self.next_generation.wrapping_add(1);
        self.active = Some(handle);
        (cancelled, handle)
    }

    /// Cancels the live timer, if any, returning its handle.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.active.take()
    }

    /// Consumes an expiry notification.
    ///
    /// Returns `true` only when `handle` is the live timer; the timer is then
    /// no longer pending.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.active == Some(handle) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Returns the live handle, if a clear is pending.
    #[must_use]
    pub const fn active(&self) -> Option<TimerHandle> {
        self.active
    }
}
