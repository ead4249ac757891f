//! Graceful shutdown: cancel deferred work, destroy webviews, drop the window.

use super::core::ShellApp;

impl ShellApp {
    /// Tear down in order: controller (cancels the pending back navigation
    /// and drops the content view), chrome view, then the window. Safe to
    /// call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.pending = None;
        if let Some(mut shell) = self.shell.take() {
            shell.shutdown();
        }
        self.translator = None;
        self.events.drain();
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::ShellApp;
    use rxshell_config::ShellConfig;
    use rxshell_webview::WebViewEvent;

    fn app() -> ShellApp {
        ShellApp::new(ShellConfig::default(), None, None)
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();

        assert!(app.shell.is_none());
        assert!(app.pending.is_none());
        assert!(app.translator.is_none());
        assert!(app.window.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown();
        assert!(app.shell.is_none());
    }

    #[test]
    fn shutdown_discards_queued_events() {
        let mut app = app();
        app.events.push(WebViewEvent::NavigationBlocked {
            url: "https://example.com/".into(),
        });
        app.shutdown();
        assert!(app.events.drain().is_empty());
    }

    #[test]
    fn no_pending_launch_is_a_no_op() {
        let mut app = app();
        assert!(app.poll_pending_launch(std::time::Instant::now()));
        assert!(app.shell.is_none());
    }

    #[test]
    fn polling_without_a_shell_drops_events() {
        let mut app = app();
        app.events.push(WebViewEvent::PopupRequested { href: None });
        app.poll_webview_events();
        assert!(app.events.drain().is_empty());
    }
}
