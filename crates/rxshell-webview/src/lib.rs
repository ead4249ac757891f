//! `wry` adapter for the shell controller.
//!
//! - [`ShellWebView`]: the hosted app's browser surface
//! - [`ChromeView`]: transparent overlay drawing the shell's own UI
//! - [`EventTranslator`]: turns captured webview events into controller events
//! - [`EngineAgentQuery`]: reads the engine's default user agent
//! - IPC bridge between Rust and both pages

pub mod agent;
pub mod chrome;
pub mod events;
pub mod ipc;
pub mod surface;
pub mod translate;

pub use agent::{find_engine_agent, EngineAgentQuery};
pub use chrome::{ChromeView, ViewLayout};
pub use events::{EventSink, PageLoadState, ViewRole, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use surface::{ContentViewOptions, ShellWebView};
pub use translate::{EventTranslator, HistoryUpdate};
