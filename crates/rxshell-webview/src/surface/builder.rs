use std::path::PathBuf;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use rxshell_common::SurfaceError;

use crate::events::{EventSink, PageLoadState, ViewRole, WebViewEvent};
use crate::ipc::{is_ipc_kind_allowed, IpcMessage, CONTENT_INIT_SCRIPT};

use super::history::HistoryTracker;
use super::ShellWebView;

/// Creation options for the hosted app's webview.
#[derive(Debug, Clone)]
pub struct ContentViewOptions {
    /// Prefix every in-place navigation must start with.
    pub home_url: String,
    pub user_agent: Option<String>,
    pub devtools: bool,
    /// Engine storage (cookies, local storage, HTTP cache). `None` uses the
    /// engine's default location.
    pub data_dir: Option<PathBuf>,
}

impl ShellWebView {
    /// Build the content webview as a child of `window`. Nothing is loaded
    /// until the controller starts.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        options: ContentViewOptions,
        events: EventSink,
    ) -> Result<Self, SurfaceError> {
        debug!(data_dir = ?options.data_dir, "content web context");
        let mut context = WebContext::new(options.data_dir);
        let mut builder = WebViewBuilder::with_web_context(&mut context)
            .with_bounds(bounds)
            .with_devtools(options.devtools || cfg!(debug_assertions))
            .with_clipboard(true)
            .with_initialization_script(CONTENT_INIT_SCRIPT);

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_ipc_handler(builder, events.clone());
        builder = attach_page_load_handler(builder, events.clone());
        builder = attach_navigation_handler(builder, events.clone(), options.home_url);
        builder = attach_new_window_handler(builder, events);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| SurfaceError::Backend(e.to_string()))?;
        debug!("content webview created");

        Ok(Self {
            webview,
            _context: context,
            history: HistoryTracker::new(),
            cache_mode: None,
        })
    }
}

/// Scope check used by the synchronous navigation handler. Engine-internal
/// pages pass so error pages and the blank bootstrap document can load.
pub fn allows_in_place(url: &str, home_url: &str) -> bool {
    url.starts_with(home_url)
        || url == "about:blank"
        || url.starts_with("data:text/html")
        || url.starts_with("chrome-error://")
        || url.starts_with("about:neterror")
}

fn attach_ipc_handler<'a>(builder: WebViewBuilder<'a>, events: EventSink) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();
        match IpcMessage::from_json(&body) {
            Some(msg) if is_ipc_kind_allowed(ViewRole::Content, &msg.kind) => {
                events.push(WebViewEvent::IpcMessage {
                    role: ViewRole::Content,
                    body,
                });
            }
            Some(msg) => warn!(kind = %msg.kind, "content IPC rejected: kind not allowed"),
            None => warn!(body_len = body.len(), "content IPC rejected: invalid message"),
        }
    })
}

fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?state, url = %url, "page load");
        events.push(WebViewEvent::PageLoad { state, url });
    })
}

fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    home_url: String,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        if allows_in_place(&url, &home_url) {
            return true;
        }
        debug!(url = %url, "navigation blocked: outside hosted app");
        events.push(WebViewEvent::NavigationBlocked { url });
        false
    })
}

fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        let href = Some(url).filter(|u| !u.trim().is_empty());
        debug!(href = ?href, "new window refused");
        events.push(WebViewEvent::PopupRequested { href });
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "https://rxresu.me/";

    #[test]
    fn in_scope_urls_load_in_place() {
        assert!(allows_in_place("https://rxresu.me/", HOME));
        assert!(allows_in_place("https://rxresu.me/builder/abc", HOME));
    }

    #[test]
    fn engine_pages_load_in_place() {
        assert!(allows_in_place("about:blank", HOME));
        assert!(allows_in_place("chrome-error://chromewebdata/", HOME));
        assert!(allows_in_place("about:neterror?e=dnsNotFound", HOME));
    }

    #[test]
    fn everything_else_is_blocked() {
        assert!(!allows_in_place("https://github.com/", HOME));
        assert!(!allows_in_place("http://rxresu.me/", HOME));
        assert!(!allows_in_place("mailto:a@b.c", HOME));
        assert!(!allows_in_place("https://evil.example/?https://rxresu.me/", HOME));
        assert!(!allows_in_place("", HOME));
    }
}
