//! Browser-surface callbacks.

use std::time::Instant;

use rxshell_common::LoadErrorCode;
use tracing::{debug, info, trace};

use crate::connectivity::ConnectivityProbe;
use crate::deferred::DeferredAction;
use crate::error_recovery::{ErrorContract, ErrorOutcome};
use crate::events::ShellEvent;
use crate::popup::{filter_popup, PopupOutcome};
use crate::progress::ProgressTransition;
use crate::scope::NavigationDecision;
use crate::surface::{BrowserSurface, ExternalDispatcher, ShellUi};

use super::ShellController;

impl<S, U, P, D> ShellController<S, U, P, D>
where
    S: BrowserSurface,
    U: ShellUi,
    P: ConnectivityProbe,
    D: ExternalDispatcher,
{
    /// Route one queued surface event.
    pub fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::NavigationStarted { url } => {
                self.on_navigation_start(&url);
            }
            ShellEvent::Progress(progress) => self.on_progress(progress),
            ShellEvent::LegacyError { code } => self.on_error_legacy(code),
            ShellEvent::ModernError {
                code,
                main_document,
            } => self.on_error_modern(code, main_document),
            ShellEvent::PopupRequested { href } => {
                self.on_popup_requested(href.as_deref());
            }
            ShellEvent::RetryRequested => self.retry(),
        }
    }

    pub fn on_navigation_start(&mut self, url: &str) -> NavigationDecision {
        let decision = self.scope.classify(url);
        if self.is_torn_down() {
            return decision;
        }
        match decision {
            NavigationDecision::LoadInPlace => {
                trace!(url = %url, "in-scope navigation");
                if self.progress.on_navigation_start() {
                    self.ui.set_progress(0);
                    self.ui.show_loading_overlay(true);
                }
            }
            NavigationDecision::HandOffExternal => self.hand_off(url),
            NavigationDecision::SuppressPopup => {}
        }
        decision
    }

    pub fn on_progress(&mut self, progress: u8) {
        if self.is_torn_down() {
            return;
        }
        match self.progress.on_progress(progress) {
            ProgressTransition::Ignored => {}
            ProgressTransition::Advanced(p) | ProgressTransition::Background(p) => {
                self.ui.set_progress(p);
            }
            ProgressTransition::Revealed(p) => {
                debug!(progress = p, "page ready, revealing content");
                self.ui.set_progress(p);
                self.ui.show_loading_overlay(false);
            }
        }
    }

    /// One error per page; always the main document.
    pub fn on_error_legacy(&mut self, code: LoadErrorCode) {
        if !self.errors.accepts(ErrorContract::Legacy) {
            trace!(%code, "legacy error signal ignored, contract inactive");
            return;
        }
        self.apply_error(code, true);
    }

    /// One error per resource.
    pub fn on_error_modern(&mut self, code: LoadErrorCode, is_main_document: bool) {
        if !self.errors.accepts(ErrorContract::Modern) {
            trace!(%code, "modern error signal ignored, contract inactive");
            return;
        }
        self.apply_error(code, is_main_document);
    }

    /// Always returns `true`: no secondary window is ever created.
    pub fn on_popup_requested(&mut self, href: Option<&str>) -> bool {
        let decision = NavigationDecision::SuppressPopup;
        match filter_popup(href) {
            PopupOutcome::Redirect(url) => {
                debug!(url = %url, ?decision, "popup redirected into surface");
                self.with_surface("load_url", |s| s.load_url(&url));
            }
            PopupOutcome::Discard => {
                debug!(?decision, "popup without target discarded");
            }
        }
        true
    }

    fn apply_error(&mut self, code: LoadErrorCode, is_main_document: bool) {
        if self.is_torn_down() {
            return;
        }
        match self.errors.handle(code, is_main_document) {
            ErrorOutcome::Ignored => {}
            ErrorOutcome::RecoverBack { delay } => {
                self.deferred
                    .schedule(Instant::now(), delay, DeferredAction::GoBack);
            }
            ErrorOutcome::GoOffline => self.go_offline(),
        }
    }

    fn go_offline(&mut self) {
        self.progress.on_fatal_error();
        self.ui.set_progress(100);
        self.ui.show_loading_overlay(false);
        self.with_surface("set_visible", |s| s.set_visible(false));
        self.ui.show_offline_panel(true);
    }

    /// Stop, reload the in-scope page, then try the OS.
    fn hand_off(&mut self, url: &str) {
        info!(url = %url, "navigation outside hosted app, handing off");
        // Stopping alone leaves the hosted app frozen.
        self.with_surface("stop_loading", |s| s.stop_loading());
        self.with_surface("reload", |s| s.reload());

        let dispatched = !url.trim().is_empty() && self.dispatcher.dispatch_external_view(url);
        if !dispatched {
            info!(url = %url, "no external handler available");
            self.ui.show_no_handler_notice();
        }
    }
}
