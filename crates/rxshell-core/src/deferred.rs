//! Delayed actions owned by the controller.
//!
//! The host polls [`DeferredTask::take_due`] from its event loop. Cancelling
//! drops the pending action, so nothing fires after teardown.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    GoBack,
}

/// A single pending action. Re-scheduling the same action keeps the
/// earlier deadline.
#[derive(Debug, Default)]
pub struct DeferredTask {
    pending: Option<(Instant, DeferredAction)>,
}

impl DeferredTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: DeferredAction) {
        let due = now + delay;
        match self.pending {
            Some((existing, pending)) if pending == action && existing <= due => {}
            _ => self.pending = Some((due, action)),
        }
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(due, _)| due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Remove and return the action if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<DeferredAction> {
        match self.pending {
            Some((due, action)) if due <= now => {
                self.pending = None;
                Some(action)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_deadline() {
        let now = Instant::now();
        let mut task = DeferredTask::new();
        task.schedule(now, Duration::from_millis(100), DeferredAction::GoBack);
        assert_eq!(task.take_due(now), None);
        assert_eq!(task.take_due(now + Duration::from_millis(99)), None);
        assert_eq!(
            task.take_due(now + Duration::from_millis(100)),
            Some(DeferredAction::GoBack)
        );
        assert!(!task.is_pending());
    }

    #[test]
    fn fires_once() {
        let now = Instant::now();
        let mut task = DeferredTask::new();
        task.schedule(now, Duration::ZERO, DeferredAction::GoBack);
        assert!(task.take_due(now).is_some());
        assert!(task.take_due(now + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn cancel_prevents_firing() {
        let now = Instant::now();
        let mut task = DeferredTask::new();
        task.schedule(now, Duration::from_millis(100), DeferredAction::GoBack);
        assert!(task.cancel());
        assert_eq!(task.take_due(now + Duration::from_secs(1)), None);
        assert!(!task.cancel());
    }

    #[test]
    fn rescheduling_keeps_earliest_deadline() {
        let now = Instant::now();
        let mut task = DeferredTask::new();
        task.schedule(now, Duration::from_millis(100), DeferredAction::GoBack);
        task.schedule(now, Duration::from_millis(500), DeferredAction::GoBack);
        assert_eq!(task.deadline(), Some(now + Duration::from_millis(100)));
    }
}
