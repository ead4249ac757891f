//! Engine user agent discovery.
//!
//! wry only takes a user agent at build time and cannot report the engine
//! default, so a hidden throwaway webview reads `navigator.userAgent` and
//! posts it back before the content view is built.

use std::time::{Duration, Instant};

use rxshell_common::SurfaceError;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::events::{EventSink, WebViewEvent};
use crate::ipc::IpcMessage;

/// How long to wait for the report before building with the engine default.
pub const AGENT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

const AGENT_PAGE: &str = r#"<!DOCTYPE html>
<html><body><script>
window.ipc.postMessage(JSON.stringify({ kind: 'user_agent', payload: { value: navigator.userAgent } }));
</script></body></html>"#;

/// Hidden webview that reports the engine's default user agent once.
pub struct EngineAgentQuery {
    _webview: WebView,
    deadline: Instant,
}

impl EngineAgentQuery {
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        events: EventSink,
    ) -> Result<Self, SurfaceError> {
        let webview = WebViewBuilder::new()
            .with_bounds(wry::Rect {
                position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
                size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(1.0, 1.0)),
            })
            .with_visible(false)
            .with_html(AGENT_PAGE)
            .with_ipc_handler(move |request| match parse_agent_message(request.body()) {
                Some(agent) => events.push(WebViewEvent::EngineUserAgent { agent }),
                None => warn!("agent query sent an unexpected message"),
            })
            .build_as_child(window)
            .map_err(|e| SurfaceError::Backend(e.to_string()))?;
        debug!("agent query webview created");

        Ok(Self {
            _webview: webview,
            deadline: Instant::now() + AGENT_QUERY_TIMEOUT,
        })
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// The agent carried by a `user_agent` message, if `body` is one.
pub fn parse_agent_message(body: &str) -> Option<String> {
    let msg = IpcMessage::from_json(body).filter(|m| m.kind == "user_agent")?;
    let agent = msg.payload_json()?.get("value")?.as_str()?.trim();
    (!agent.is_empty()).then(|| agent.to_string())
}

/// The first reported agent among drained events.
pub fn find_engine_agent(events: &[WebViewEvent]) -> Option<&str> {
    events.iter().find_map(|event| match event {
        WebViewEvent::EngineUserAgent { agent } => Some(agent.as_str()),
        _ => None,
    })
}
