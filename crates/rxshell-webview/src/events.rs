//! Events captured from wry callbacks.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Which of the two webviews produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRole {
    /// The hosted web app.
    Content,
    /// The shell's overlay UI.
    Chrome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    PageLoad { state: PageLoadState, url: String },
    /// Out-of-scope navigation refused by the navigation handler.
    NavigationBlocked { url: String },
    /// New-window request; the window itself is always refused.
    PopupRequested { href: Option<String> },
    IpcMessage { role: ViewRole, body: String },
    /// The engine's default user agent, read by [`crate::agent::EngineAgentQuery`].
    EngineUserAgent { agent: String },
}

impl WebViewEvent {
    /// The chrome page finished loading and can take state updates.
    pub fn is_chrome_ready(&self) -> bool {
        match self {
            WebViewEvent::IpcMessage {
                role: ViewRole::Chrome,
                body,
            } => crate::ipc::IpcMessage::from_json(body).is_some_and(|m| m.kind == "ready"),
            _ => false,
        }
    }
}

/// Shared queue the wry handlers push into and the event loop drains.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WebViewEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }

    /// Take every pending event in arrival order.
    pub fn drain(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}
