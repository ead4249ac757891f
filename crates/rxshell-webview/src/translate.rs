//! Captured webview events -> controller events.
//!
//! Page-load callbacks become navigation starts and coarse progress, and the
//! content init script refines progress and reports failed resources.
//! Main-document failures show up as engine error pages, or as an in-scope
//! load that finished without the init script ever running in it. Errors are
//! emitted only for the active contract.

use rxshell_common::LoadErrorCode;
use rxshell_core::{ErrorContract, HostedAppScope, ShellEvent};
use tracing::{debug, warn};

use crate::events::{PageLoadState, ViewRole, WebViewEvent};
use crate::ipc::{is_ipc_kind_allowed, IpcMessage};

/// Progress reported when a page starts loading.
pub const STARTED_PROGRESS: u8 = 10;

pub struct EventTranslator {
    scope: HostedAppScope,
    contract: ErrorContract,
    current_url: Option<String>,
    /// The init script reported progress for the current document.
    script_reported: bool,
}

/// In-page session history change reported by the content init script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push(String),
    Replace(String),
    Pop(String),
}

impl EventTranslator {
    pub fn new(scope: HostedAppScope, contract: ErrorContract) -> Self {
        Self {
            scope,
            contract,
            current_url: None,
            script_reported: true,
        }
    }

    pub fn contract(&self) -> ErrorContract {
        self.contract
    }

    /// URL of the last in-scope page that started loading.
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn translate(&mut self, event: WebViewEvent) -> Vec<ShellEvent> {
        match event {
            WebViewEvent::PageLoad { state, url } => self.page_load(state, url),
            WebViewEvent::NavigationBlocked { url } => {
                vec![ShellEvent::NavigationStarted { url }]
            }
            WebViewEvent::PopupRequested { href } => vec![ShellEvent::PopupRequested { href }],
            WebViewEvent::IpcMessage { role, body } => self.ipc(role, &body),
            WebViewEvent::EngineUserAgent { .. } => Vec::new(),
        }
    }

    fn page_load(&mut self, state: PageLoadState, url: String) -> Vec<ShellEvent> {
        if is_blank_page(&url) {
            return Vec::new();
        }
        if let Some(code) = error_page_code(&url) {
            return match state {
                PageLoadState::Started => {
                    debug!(url = %url, %code, "engine error page");
                    self.error(code, true)
                }
                PageLoadState::Finished => Vec::new(),
            };
        }

        match state {
            PageLoadState::Started => {
                if !self.scope.contains(&url) {
                    return vec![ShellEvent::NavigationStarted { url }];
                }
                self.current_url = Some(url.clone());
                self.script_reported = false;
                vec![
                    ShellEvent::NavigationStarted { url },
                    ShellEvent::Progress(STARTED_PROGRESS),
                ]
            }
            PageLoadState::Finished if !self.script_reported && self.scope.contains(&url) => {
                // Engines that render their error page under the failing
                // URL (WebKitGTK) never run the init script in it.
                self.script_reported = true;
                debug!(url = %url, "load finished without a document");
                self.error(LoadErrorCode::Unknown, true)
            }
            PageLoadState::Finished => vec![ShellEvent::Progress(100)],
        }
    }

    fn ipc(&mut self, role: ViewRole, body: &str) -> Vec<ShellEvent> {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(?role, body_len = body.len(), "IPC message rejected: malformed");
            return Vec::new();
        };
        if !is_ipc_kind_allowed(role, &msg.kind) {
            warn!(?role, kind = %msg.kind, "IPC message rejected: kind not allowed");
            return Vec::new();
        }

        let payload = msg.payload_json();
        match msg.kind.as_str() {
            "progress" => payload
                .and_then(|p| p.get("value"))
                .and_then(|v| v.as_u64())
                .map(|v| {
                    self.script_reported = true;
                    vec![ShellEvent::Progress(v.min(100) as u8)]
                })
                .unwrap_or_default(),
            "load_error" => {
                let Some(p) = payload else {
                    return Vec::new();
                };
                let url = p.get("url").and_then(|v| v.as_str()).unwrap_or_default();
                let code = LoadErrorCode::from_net_error(
                    p.get("error").and_then(|v| v.as_str()).unwrap_or_default(),
                );
                let main_document = p
                    .get("main_document")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false)
                    || is_main_document(url, self.current_url.as_deref());
                self.error(code, main_document)
            }
            "retry" => vec![ShellEvent::RetryRequested],
            // "ready" re-syncs the chrome view and "history" feeds the
            // surface's tracker; both are handled by the host.
            _ => Vec::new(),
        }
    }

    fn error(&self, code: LoadErrorCode, main_document: bool) -> Vec<ShellEvent> {
        match self.contract {
            ErrorContract::Modern => vec![ShellEvent::ModernError {
                code,
                main_document,
            }],
            // The legacy contract only ever reports the page itself.
            ErrorContract::Legacy if main_document => vec![ShellEvent::LegacyError { code }],
            ErrorContract::Legacy => Vec::new(),
        }
    }
}

/// Parse a `history` message from the content page.
pub fn history_update(event: &WebViewEvent) -> Option<HistoryUpdate> {
    let WebViewEvent::IpcMessage {
        role: ViewRole::Content,
        body,
    } = event
    else {
        return None;
    };
    let msg = IpcMessage::from_json(body).filter(|m| m.kind == "history")?;
    let payload = msg.payload_json()?;
    let url = payload.get("url")?.as_str()?.to_string();
    match payload.get("op")?.as_str()? {
        "push" => Some(HistoryUpdate::Push(url)),
        "replace" => Some(HistoryUpdate::Replace(url)),
        "pop" => Some(HistoryUpdate::Pop(url)),
        other => {
            debug!(op = other, "unknown history op");
            None
        }
    }
}

/// The engine's bootstrap document, before anything was loaded.
pub fn is_blank_page(url: &str) -> bool {
    url.is_empty() || url == "about:blank" || url.starts_with("data:")
}

/// Same document as the page being loaded, ignoring fragments.
pub fn is_main_document(failing_url: &str, current_url: Option<&str>) -> bool {
    let strip = |u: &str| u.split('#').next().unwrap_or(u).to_string();
    match current_url {
        Some(current) if !failing_url.is_empty() => strip(failing_url) == strip(current),
        _ => false,
    }
}

/// The failure an engine error page stands for, if `url` is one.
pub fn error_page_code(url: &str) -> Option<LoadErrorCode> {
    if url.starts_with("chrome-error://") {
        return Some(LoadErrorCode::Unknown);
    }
    let rest = url.strip_prefix("about:neterror")?;
    let reason = rest
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("e="))
        .unwrap_or_default();
    Some(match reason {
        "dnsNotFound" => LoadErrorCode::HostLookup,
        "connectionFailure" | "netOffline" | "netReset" | "netInterrupt" => LoadErrorCode::Connect,
        "netTimeout" => LoadErrorCode::Timeout,
        "redirectLoop" => LoadErrorCode::RedirectLoop,
        "unknownProtocolFound" => LoadErrorCode::UnsupportedScheme,
        "malformedURI" => LoadErrorCode::BadUrl,
        "fileNotFound" => LoadErrorCode::FileNotFound,
        r if r.starts_with("nssFailure") || r.starts_with("nssBadCert") => {
            LoadErrorCode::FailedSslHandshake
        }
        _ => LoadErrorCode::Unknown,
    })
}
