//! Actions representing side effects to be executed by the widget's host.
//!
//! The state machine never calls back into its owner. Every effect that
//! crosses the widget boundary (change notifications, open/close requests for
//! delegated state, focus moves, timer scheduling) is returned as an
//! [`Action`] from event handling, and the host executes them in order.

use super::timer::TimerHandle;
use std::time::Duration;

/// Commands emitted by the select widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<V> {
    /// An option was committed.
    ///
    /// Emitted exactly once per commit, for both controlled and uncontrolled
    /// selection.
    Change {
        /// Value of the committed option.
        value: V,
        /// Position of the committed option in the option list.
        selected_index: usize,
    },

    /// The widget wants to open, but open state is delegated to the owner.
    RequestOpen,

    /// The widget wants to close, but open state is delegated to the owner.
    RequestClose,

    /// Keyboard focus should return to the anchor control.
    FocusAnchor,

    /// Schedule a search-buffer clear. Report expiry with the same handle.
    ScheduleSearchClear {
        /// Handle identifying this schedule.
        handle: TimerHandle,
        /// Inactivity delay before the clear.
        after: Duration,
    },

    /// A previously scheduled clear is no longer wanted.
    CancelSearchClear {
        /// Handle of the cancelled schedule.
        handle: TimerHandle,
    },
}
