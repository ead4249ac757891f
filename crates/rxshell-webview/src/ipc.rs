//! IPC protocol between Rust and the two pages.
//!
//! - **JS -> Rust**: `window.ipc.postMessage(JSON.stringify({kind, payload}))`
//!   lands in the webview's IPC handler.
//! - **Rust -> JS**: `evaluate_script` calls `window.rxshell.ipc._dispatch`.

use serde::{Deserialize, Serialize};

use crate::events::ViewRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    pub payload: IpcPayload,
}

/// Either a plain string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    /// Structured payload, if any.
    pub fn payload_json(&self) -> Option<&serde_json::Value> {
        match &self.payload {
            IpcPayload::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Kinds the hosted page may send.
pub const CONTENT_IPC_KINDS: &[&str] = &["progress", "load_error", "history"];

/// Kinds the chrome overlay may send. `ready` fires once its page has
/// loaded and can take state updates.
pub const CHROME_IPC_KINDS: &[&str] = &["retry", "ready"];

pub fn is_ipc_kind_allowed(role: ViewRole, kind: &str) -> bool {
    let allowed = match role {
        ViewRole::Content => CONTENT_IPC_KINDS,
        ViewRole::Chrome => CHROME_IPC_KINDS,
    };
    allowed.contains(&kind)
}

/// Injected into the hosted page. Reports document readiness as progress,
/// failed sub-resources and in-page history changes (`pushState`,
/// `replaceState`, `popstate`), and receives cache-mode and lifecycle
/// announcements from the shell.
pub const CONTENT_INIT_SCRIPT: &str = r#"
(function() {
    if (window.rxshell) return;
    var handlers = {};
    function send(kind, payload) {
        try {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        } catch (_) {}
    }
    window.rxshell = {
        cacheMode: null,
        lifecycle: 'active',
        ipc: {
            on: function(kind, callback) { handlers[kind] = callback; },
            _dispatch: function(kind, payload) {
                var handler = handlers[kind];
                if (handler) handler(payload);
            }
        }
    };
    handlers.cache_mode = function(p) {
        window.rxshell.cacheMode = p && p.mode;
    };
    handlers.lifecycle = function(p) {
        window.rxshell.lifecycle = (p && p.state) || 'active';
        document.dispatchEvent(new CustomEvent('rxshell:' + window.rxshell.lifecycle));
    };

    var steps = { loading: 30, interactive: 70, complete: 100 };
    function reportProgress() {
        var value = steps[document.readyState];
        if (value) send('progress', { value: value });
    }
    reportProgress();
    document.addEventListener('readystatechange', reportProgress);

    function reportHistory(op) {
        send('history', { op: op, url: String(location.href) });
    }
    ['pushState', 'replaceState'].forEach(function(name) {
        var original = history[name];
        if (typeof original !== 'function') return;
        history[name] = function() {
            var result = original.apply(this, arguments);
            reportHistory(name === 'pushState' ? 'push' : 'replace');
            return result;
        };
    });
    window.addEventListener('popstate', function() { reportHistory('pop'); });

    window.addEventListener('error', function(e) {
        var target = e.target;
        if (!target || target === window) return;
        var url = target.currentSrc || target.src || target.href;
        if (!url) return;
        send('load_error', { url: String(url), error: 'ERR_FAILED', main_document: false });
    }, true);
})();
"#;

/// JS snippet delivering `kind` + `payload` to a page's handlers.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.rxshell && window.rxshell.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
