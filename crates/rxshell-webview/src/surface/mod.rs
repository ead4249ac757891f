//! The hosted app's browser surface.

mod builder;
mod history;

use rxshell_common::{CacheMode, SurfaceError};
use rxshell_core::BrowserSurface;
use tracing::debug;
use wry::{WebContext, WebView};

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::js_dispatch_message;
use crate::translate::{error_page_code, history_update, is_blank_page};

pub use builder::{allows_in_place, ContentViewOptions};
pub use history::HistoryTracker;

/// [`BrowserSurface`] over a `wry::WebView`.
///
/// wry has no stop, reload, back or cache switch, so those go through the
/// page: `window.stop()`, `location.reload()`, `history.back()`, and a
/// `cache_mode` announcement the page can read from
/// `window.rxshell.cacheMode`.
pub struct ShellWebView {
    webview: WebView,
    // Dropped after the webview that uses it.
    _context: WebContext,
    history: HistoryTracker,
    cache_mode: Option<CacheMode>,
}

fn backend(e: wry::Error) -> SurfaceError {
    SurfaceError::Backend(e.to_string())
}

impl ShellWebView {
    /// Feed a captured event so history tracking stays current. Each
    /// committed document also gets the cache mode re-announced, since the
    /// page state is rebuilt on every load.
    pub fn observe(&mut self, event: &WebViewEvent) {
        if let Some(update) = history_update(event) {
            self.history.apply(&update);
            return;
        }
        let WebViewEvent::PageLoad {
            state: PageLoadState::Finished,
            url,
        } = event
        else {
            return;
        };
        if error_page_code(url).is_some() || is_blank_page(url) {
            return;
        }
        self.history.record_commit(url);
        if let Some(mode) = self.cache_mode {
            if let Err(e) = self.send_ipc("cache_mode", serde_json::json!({ "mode": mode.as_str() })) {
                debug!(error = %e, "cache mode announcement failed");
            }
        }
    }

    pub fn cache_mode(&self) -> Option<CacheMode> {
        self.cache_mode
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), SurfaceError> {
        self.webview.set_bounds(bounds).map_err(backend)
    }

    fn send_ipc(&self, kind: &str, payload: serde_json::Value) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(&js_dispatch_message(kind, &payload))
            .map_err(backend)
    }
}

impl BrowserSurface for ShellWebView {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        debug!(url = %url, "loading");
        self.webview.load_url(url).map_err(backend)
    }

    fn stop_loading(&mut self) -> Result<(), SurfaceError> {
        self.webview.evaluate_script("window.stop();").map_err(backend)
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script("location.reload();")
            .map_err(backend)
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.history.begin_back();
        self.webview
            .evaluate_script("history.back();")
            .map_err(backend)
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn set_cache_mode(&mut self, mode: CacheMode) -> Result<(), SurfaceError> {
        self.cache_mode = Some(mode);
        self.send_ipc("cache_mode", serde_json::json!({ "mode": mode.as_str() }))
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible).map_err(backend)
    }

    fn pause(&mut self) -> Result<(), SurfaceError> {
        self.send_ipc("lifecycle", serde_json::json!({ "state": "paused" }))
    }

    fn resume(&mut self) -> Result<(), SurfaceError> {
        self.send_ipc("lifecycle", serde_json::json!({ "state": "active" }))
    }
}
