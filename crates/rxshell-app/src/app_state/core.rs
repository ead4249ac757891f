//! ShellApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use rxshell_config::ShellConfig;
use rxshell_core::ShellController;
use rxshell_platform::{SystemConnectivityProbe, SystemDispatcher};
use rxshell_webview::{ChromeView, EventSink, EventTranslator, ShellWebView};

use super::init::PendingLaunch;

/// The controller wired to the desktop implementations.
pub(super) type Shell =
    ShellController<ShellWebView, ChromeView, SystemConnectivityProbe, SystemDispatcher>;

pub struct ShellApp {
    pub(super) config: ShellConfig,
    pub(super) launch_action: Option<String>,
    pub(super) launch_uri: Option<String>,

    pub(super) window: Option<Arc<Window>>,
    /// Set while the agent query runs, before the views exist.
    pub(super) pending: Option<PendingLaunch>,
    pub(super) shell: Option<Shell>,
    pub(super) translator: Option<EventTranslator>,
    /// Filled by wry handlers, drained by the poll loop.
    pub(super) events: EventSink,

    pub(super) modifiers: winit::keyboard::ModifiersState,
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(
        config: ShellConfig,
        launch_action: Option<String>,
        launch_uri: Option<String>,
    ) -> Self {
        Self {
            config,
            launch_action,
            launch_uri,
            window: None,
            pending: None,
            shell: None,
            translator: None,
            events: EventSink::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
