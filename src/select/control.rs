//! Controlled versus uncontrolled ownership of widget state.
//!
//! Each independent piece of widget state (open flag, committed selection) is
//! either owned by the widget or delegated to the caller. The mode is picked
//! once, at construction, from whether the caller supplied the corresponding
//! control option, and never changes afterwards.
//!
//! Delegated state is read-only from the widget's point of view. When the
//! widget wants to change it, [`Control::request`] reports that the change was
//! not applied, and the state machine emits an action instead. The owner later
//! pushes the authoritative value back through [`Control::sync`].

/// Ownership wrapper for one piece of widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<T> {
    /// Widget-owned state, mutated directly by the state machine.
    Owned(T),

    /// Caller-owned state. Holds the last value the caller supplied.
    Delegated(T),
}

impl<T> Control<T> {
    /// Returns the current value regardless of ownership.
    #[must_use]
    pub const fn get(&self) -> &T {
        match self {
            Self::Owned(value) | Self::Delegated(value) => value,
        }
    }

    /// Returns `true` if the caller owns this state.
    #[must_use]
    pub const fn is_delegated(&self) -> bool {
        matches!(self, Self::Delegated(_))
    }

    /// Asks for a state change originating inside the widget.
    ///
    /// Owned state is updated and `true` returned. Delegated state is left
    /// untouched and `false` returned; the caller must be notified instead.
    pub fn request(&mut self, next: T) -> bool {
        match self {
            Self::Owned(value) => {
                *value = next;
                true
            }
            Self::Delegated(_) => false,
        }
    }

    /// Accepts the authoritative value from the caller.
    ///
    /// Only meaningful for delegated state. Owned state ignores the update and
    /// returns `false`.
    pub fn sync(&mut self, next: T) -> bool {
        match self {
            Self::Delegated(value) => {
                *value = next;
                true
            }
            Self::Owned(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_state_applies_requests() {
        let mut open = Control::Owned(false);
        assert!(open.request(true));
        assert!(*open.get());
        assert!(!open.sync(false));
        assert!(*open.get());
    }

    #[test]
    fn delegated_state_waits_for_the_owner() {
        let mut open = Control::Delegated(false);
        assert!(!open.request(true));
        assert!(!*open.get());
        assert!(open.sync(true));
        assert!(*open.get());
        assert!(open.is_delegated());
    }
}
