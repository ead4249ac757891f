//! Window creation and webview setup.
//!
//! When the content view's user agent extends the engine default, launch
//! takes two steps: a hidden webview reads the default first, and the views
//! are built once it reports (or times out).

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use rxshell_config::ShellConfig;
use rxshell_core::{ShellController, ShellSettings};
use rxshell_platform::{webview_data_dir, SystemConnectivityProbe, SystemDispatcher};
use rxshell_webview::{
    find_engine_agent, ChromeView, ContentViewOptions, EngineAgentQuery, EventTranslator,
    ShellWebView, ViewLayout,
};

use crate::settings::{content_user_agent, needs_engine_agent, shell_settings};

use super::core::ShellApp;

/// Settings held while the agent query runs.
pub(super) struct PendingLaunch {
    settings: ShellSettings,
    query: EngineAgentQuery,
}

impl PendingLaunch {
    pub(super) fn deadline(&self) -> Instant {
        self.query.deadline()
    }
}

/// Logical window size.
pub(super) fn window_layout(window: &Window) -> ViewLayout {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    ViewLayout::new(size.width, size.height)
}

impl ShellApp {
    /// Create the window, then either launch or wait for the agent query.
    /// Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let settings = match shell_settings(&self.config) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Invalid app scope in config, using defaults: {e}");
                match shell_settings(&ShellConfig::default()) {
                    Ok(settings) => settings,
                    Err(e) => {
                        tracing::error!("Default app scope rejected: {e}");
                        return false;
                    }
                }
            }
        };

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => std::sync::Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window.clone());

        if needs_engine_agent(&self.config.network) {
            match EngineAgentQuery::build(window.as_ref(), self.events.clone()) {
                Ok(query) => {
                    tracing::debug!("waiting for engine user agent");
                    self.pending = Some(PendingLaunch { settings, query });
                    return true;
                }
                Err(e) => tracing::warn!("Agent query failed, keeping engine user agent: {e}"),
            }
        }
        self.launch(settings, None)
    }

    /// Finish a pending launch once the query reported or timed out.
    /// Returns `false` if the event loop should exit.
    pub(super) fn poll_pending_launch(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending.as_ref() else {
            return true;
        };
        let events = self.events.drain();
        let agent = find_engine_agent(&events).map(str::to_string);
        if agent.is_none() && !pending.query.is_expired(now) {
            return true;
        }
        if agent.is_none() {
            tracing::warn!("Engine user agent not reported, keeping the default");
        }

        let Some(pending) = self.pending.take() else {
            return true;
        };
        let PendingLaunch { settings, query } = pending;
        drop(query);
        self.launch(settings, agent.as_deref())
    }

    /// Build both webviews and the controller, then start.
    fn launch(&mut self, settings: ShellSettings, engine_agent: Option<&str>) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };
        let layout = window_layout(&window);

        if self.config.network.mixed_content {
            tracing::info!("lenient mixed content requested; engine policy applies");
        }
        let data_dir = match webview_data_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("No webview data directory, using engine default: {e}");
                None
            }
        };
        let options = ContentViewOptions {
            home_url: settings.scope.home_url().to_string(),
            user_agent: content_user_agent(&self.config.network, engine_agent),
            devtools: self.config.window.devtools,
            data_dir,
        };
        tracing::debug!(user_agent = ?options.user_agent, "content view options");
        let content = match ShellWebView::build(
            window.as_ref(),
            layout.content_frame().to_wry(),
            options,
            self.events.clone(),
        ) {
            Ok(view) => view,
            Err(e) => {
                tracing::error!("Failed to create content webview: {e}");
                return false;
            }
        };
        let chrome = match ChromeView::build(window.as_ref(), layout, self.events.clone()) {
            Ok(view) => view,
            Err(e) => {
                tracing::error!("Failed to create chrome webview: {e}");
                return false;
            }
        };

        tracing::info!(
            contract = ?settings.error_contract,
            threshold = settings.completion_threshold,
            "shell configured"
        );
        self.translator = Some(EventTranslator::new(
            settings.scope.clone(),
            settings.error_contract,
        ));
        let mut shell = ShellController::new(
            settings,
            content,
            chrome,
            SystemConnectivityProbe::new(),
            SystemDispatcher::new(),
        );
        shell.start(self.launch_action.as_deref(), self.launch_uri.as_deref());

        self.shell = Some(shell);
        true
    }

    /// Re-lay out both views after a resize.
    pub(super) fn sync_view_bounds(&mut self) {
        let (Some(window), Some(shell)) = (&self.window, &mut self.shell) else {
            return;
        };
        let layout = window_layout(window);
        if let Some(content) = shell.surface() {
            if let Err(e) = content.set_bounds(layout.content_frame().to_wry()) {
                tracing::warn!("Failed to resize content webview: {e}");
            }
        }
        shell.ui_mut().resize(layout);
    }
}
