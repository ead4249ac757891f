//! Shell-owned UI drawn in a transparent webview stacked over the content.

mod layout;
mod page;

use std::time::Instant;

use rxshell_common::SurfaceError;
use rxshell_core::ShellUi;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::events::{EventSink, ViewRole, WebViewEvent};
use crate::ipc::{is_ipc_kind_allowed, js_dispatch_message, IpcMessage};

pub use layout::{
    ChromeCoverage, ChromeState, Frame, ViewLayout, NOTICE_DURATION, NOTICE_STRIP_HEIGHT,
    PROGRESS_STRIP_HEIGHT,
};
pub use page::CHROME_HTML;

/// [`ShellUi`] over a transparent child webview.
pub struct ChromeView {
    webview: WebView,
    state: ChromeState,
    layout: ViewLayout,
    applied: Option<ChromeCoverage>,
}

impl ChromeView {
    /// Build after the content view so it stacks on top.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        layout: ViewLayout,
        events: EventSink,
    ) -> Result<Self, SurfaceError> {
        let webview = WebViewBuilder::new()
            .with_bounds(layout.content_frame().to_wry())
            .with_transparent(true)
            .with_html(CHROME_HTML)
            .with_navigation_handler(|url| url.starts_with("about:") || url.starts_with("data:"))
            .with_new_window_req_handler(|_| false)
            .with_ipc_handler(move |request| {
                let body = request.body().to_string();
                match IpcMessage::from_json(&body) {
                    Some(msg) if is_ipc_kind_allowed(ViewRole::Chrome, &msg.kind) => {
                        events.push(WebViewEvent::IpcMessage {
                            role: ViewRole::Chrome,
                            body,
                        });
                    }
                    _ => warn!(body_len = body.len(), "chrome IPC rejected"),
                }
            })
            .build_as_child(window)
            .map_err(|e| SurfaceError::Backend(e.to_string()))?;
        debug!("chrome webview created");

        let mut view = Self {
            webview,
            state: ChromeState::default(),
            layout,
            applied: None,
        };
        view.apply_layout(Instant::now());
        Ok(view)
    }

    pub fn state(&self) -> &ChromeState {
        &self.state
    }

    pub fn resize(&mut self, layout: ViewLayout) {
        self.layout = layout;
        self.applied = None;
        self.apply_layout(Instant::now());
    }

    /// Push the full state again, e.g. once the page reports ready.
    pub fn sync(&mut self) {
        self.push_state();
        if let Some(until) = self.state.notice_until {
            let remaining = until.saturating_duration_since(Instant::now());
            if !remaining.is_zero() {
                self.send(
                    "notice",
                    serde_json::json!({ "duration_ms": remaining.as_millis() as u64 }),
                );
            }
        }
        self.applied = None;
        self.apply_layout(Instant::now());
    }

    /// Shrink back once the notice has expired.
    pub fn refresh(&mut self, now: Instant) {
        if self.state.notice_until.is_some_and(|until| now >= until) {
            self.state.notice_until = None;
        }
        self.apply_layout(now);
    }

    /// When [`Self::refresh`] next needs to run.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.notice_until
    }

    fn apply_layout(&mut self, now: Instant) {
        let coverage = self.state.coverage(now);
        if self.applied == Some(coverage) {
            return;
        }
        self.applied = Some(coverage);

        let result = match self.layout.chrome_frame(coverage) {
            None => self.webview.set_visible(false),
            Some(frame) => self
                .webview
                .set_bounds(frame.to_wry())
                .and_then(|()| self.webview.set_visible(true)),
        };
        if let Err(e) = result {
            warn!(error = %e, ?coverage, "chrome layout failed");
        }
    }

    fn push_state(&self) {
        self.send(
            "state",
            serde_json::json!({
                "progress": self.state.progress,
                "loading": self.state.loading_overlay,
                "offline": self.state.offline_panel,
            }),
        );
    }

    fn send(&self, kind: &str, payload: serde_json::Value) {
        if let Err(e) = self
            .webview
            .evaluate_script(&js_dispatch_message(kind, &payload))
        {
            warn!(kind, error = %e, "chrome IPC send failed");
        }
    }

    fn update(&mut self, f: impl FnOnce(&mut ChromeState)) {
        let before = self.state;
        f(&mut self.state);
        if self.state != before {
            self.push_state();
            self.apply_layout(Instant::now());
        }
    }
}

impl ShellUi for ChromeView {
    fn set_progress(&mut self, progress: u8) {
        self.update(|s| s.progress = progress.min(100));
    }

    fn show_loading_overlay(&mut self, visible: bool) {
        self.update(|s| s.loading_overlay = visible);
    }

    fn show_offline_panel(&mut self, visible: bool) {
        self.update(|s| s.offline_panel = visible);
    }

    fn show_no_handler_notice(&mut self) {
        let now = Instant::now();
        self.state.notice_until = Some(now + NOTICE_DURATION);
        self.send(
            "notice",
            serde_json::json!({ "duration_ms": NOTICE_DURATION.as_millis() as u64 }),
        );
        self.apply_layout(now);
    }
}
