//! Poll loop: webview events in, deferred work out.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::ShellApp;

/// Idle wake-up interval.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Earliest of the idle interval and any scheduled deadline.
pub(super) fn next_wake(now: Instant, deadlines: impl IntoIterator<Item = Option<Instant>>) -> Instant {
    deadlines
        .into_iter()
        .flatten()
        .fold(now + POLL_INTERVAL, Instant::min)
}

impl ShellApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.pending.is_some() {
            if !self.poll_pending_launch(now) {
                event_loop.exit();
                return;
            }
            if let Some(pending) = &self.pending {
                event_loop.set_control_flow(ControlFlow::WaitUntil(next_wake(
                    now,
                    [Some(pending.deadline())],
                )));
                return;
            }
        }

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }
        self.run_due(now);

        let wake = match &self.shell {
            Some(shell) => next_wake(
                now,
                [shell.next_deadline(), shell.ui().next_deadline()],
            ),
            None => now + POLL_INTERVAL,
        };
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    /// Feed captured webview events through the translator into the
    /// controller, in arrival order.
    pub(super) fn poll_webview_events(&mut self) {
        let events = self.events.drain();
        let (Some(shell), Some(translator)) = (self.shell.as_mut(), self.translator.as_mut())
        else {
            return;
        };

        for event in events {
            if event.is_chrome_ready() {
                shell.ui_mut().sync();
                continue;
            }
            if let Some(content) = shell.surface_mut() {
                content.observe(&event);
            }
            for shell_event in translator.translate(event) {
                tracing::trace!(?shell_event, "dispatching");
                shell.handle_event(shell_event);
            }
        }
    }

    fn run_due(&mut self, now: Instant) {
        if let Some(shell) = self.shell.as_mut() {
            shell.run_deferred(now);
            shell.ui_mut().refresh(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_wake_is_the_poll_interval() {
        let now = Instant::now();
        assert_eq!(next_wake(now, [None, None]), now + POLL_INTERVAL);
    }

    #[test]
    fn earlier_deadline_wins() {
        let now = Instant::now();
        let soon = now + Duration::from_millis(5);
        assert_eq!(next_wake(now, [None, Some(soon)]), soon);
    }

    #[test]
    fn later_deadline_does_not_delay_polling() {
        let now = Instant::now();
        let later = now + Duration::from_millis(100);
        assert_eq!(next_wake(now, [Some(later)]), now + POLL_INTERVAL);
    }
}
