//! Incremental type-ahead buffer with its inactivity timer.

use super::timer::{SearchTimer, TimerHandle};

/// Characters typed since the last clear, plus the timer that will clear them.
#[derive(Debug, Clone, Default)]
pub struct SearchBuffer {
    text: String,
    timer: SearchTimer,
}

impl SearchBuffer {
    /// Appends a character and restarts the inactivity timer.
    ///
    /// Returns `(cancelled, scheduled)` timer handles for the host.
    pub fn push(&mut self, c: char) -> (Option<TimerHandle>, TimerHandle) {
        self.text.push(c);
        self.timer.restart()
    }

    /// Handles timer expiry. Clears the buffer only for the live handle.
    pub fn expire(&mut self, handle: TimerHandle) -> bool {
        if self.timer.fire(handle) {
            self.text.clear();
            true
        } else {
            false
        }
    }

    /// Clears the text and cancels any pending timer.
    pub fn reset(&mut self) -> Option<TimerHandle> {
        self.text.clear();
        self.timer.cancel()
    }

    /// Cancels the pending timer without touching the text.
    pub fn cancel_timer(&mut self) -> Option<TimerHandle> {
        self.timer.cancel()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the handle of the pending clear, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<TimerHandle> {
        self.timer.active()
    }
}
