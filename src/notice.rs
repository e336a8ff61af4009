//! One-shot closed notice
//!
//! The storefront shows a "we're closed" dialog once when a view first
//! loads, and never re-prompts while the view stays mounted. That lifecycle
//! lives with the caller; this state machine keeps the one-shot rule out of
//! the UI layer.

use crate::status::OpenStatus;

/// Lifecycle of the closed notice for a single mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeState {
    /// The view has not shown the notice yet.
    #[default]
    Unshown,

    /// The notice is currently visible.
    Shown,

    /// The notice was shown and dismissed; it will not reappear.
    Dismissed,
}

/// One-shot closed-notice state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClosedNotice {
    state: NoticeState,
}

impl ClosedNotice {
    /// A fresh, unshown notice for a newly mounted view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(self) -> NoticeState {
        self.state
    }

    /// Report that the view is ready with the given status.
    ///
    /// Returns true exactly once, and only when the business is closed. The
    /// first call consumes the one shot either way: a view that loads while
    /// open never shows the notice later, matching the mount-time check.
    pub fn on_view_ready(&mut self, status: &OpenStatus) -> bool {
        if self.state != NoticeState::Unshown {
            return false;
        }

        if status.open {
            self.state = NoticeState::Dismissed;
            return false;
        }

        self.state = NoticeState::Shown;

        true
    }

    /// Dismiss a visible notice.
    pub fn dismiss(&mut self) {
        if self.state == NoticeState::Shown {
            self.state = NoticeState::Dismissed;
        }
    }
}
