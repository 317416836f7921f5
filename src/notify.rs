use std::time::{Duration, Instant};

use crate::engine::frontend::NotificationSink;

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(1400);

/// A scheduled hide of the current toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    pub fn start(now: Instant, after: Duration) -> Self {
        Self {
            deadline: now + after,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Single-slot toast. Showing a message cancels the pending dismiss and starts a new one.
pub struct Toast {
    message: Option<String>,
    dismiss: Option<DismissTimer>,
    duration: Duration,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self {
            message: None,
            dismiss: None,
            duration,
        }
    }

    pub fn show_at(&mut self, message: &str, now: Instant) {
        self.cancel();
        self.message = Some(message.to_string());
        self.dismiss = Some(DismissTimer::start(now, self.duration));
    }

    /// Drops the pending dismiss, if any. The message stays up until the next `show_at`.
    pub fn cancel(&mut self) -> bool {
        self.dismiss.take().is_some()
    }

    /// Hides the message once its timer is due. Returns true if it was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.dismiss {
            Some(timer) if timer.is_due(now) => {
                self.dismiss = None;
                self.message = None;
                true
            }
            _ => false,
        }
    }

    pub fn visible(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl NotificationSink for Toast {
    fn display(&mut self, message: &str) {
        self.show_at(message, Instant::now());
    }
}
