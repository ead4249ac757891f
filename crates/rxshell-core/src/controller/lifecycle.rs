//! Host-driven entry points: start, pause/resume, back, retry, teardown.

use std::time::Instant;

use tracing::{debug, info};

use crate::connectivity::ConnectivityProbe;
use crate::deferred::DeferredAction;
use crate::surface::{BrowserSurface, ExternalDispatcher, ShellUi};

use super::ShellController;

impl<S, U, P, D> ShellController<S, U, P, D>
where
    S: BrowserSurface,
    U: ShellUi,
    P: ConnectivityProbe,
    D: ExternalDispatcher,
{
    /// Pick the start URL, apply the cache mode and begin loading.
    pub fn start(&mut self, launch_action: Option<&str>, launch_uri: Option<&str>) {
        if self.is_torn_down() {
            return;
        }
        let url = self
            .deep_link
            .resolve_start_url(launch_action, launch_uri, &self.scope);

        self.apply_cache_policy();
        self.ui.show_offline_panel(false);
        self.ui.show_loading_overlay(true);

        info!(url = %url, "starting shell");
        self.with_surface("load_url", |s| s.load_url(&url));
    }

    pub fn pause(&mut self) {
        debug!("shell paused");
        self.with_surface("pause", |s| s.pause());
    }

    /// Forward the resume and re-evaluate the cache mode, since
    /// connectivity may have changed while in the background.
    pub fn resume(&mut self) {
        debug!("shell resumed");
        self.with_surface("resume", |s| s.resume());
        self.apply_cache_policy();
    }

    /// Returns `true` if the surface navigated back; `false` leaves the
    /// default back action to the host.
    pub fn on_back_requested(&mut self) -> bool {
        let can_go_back = self.surface.as_ref().is_some_and(|s| s.can_go_back());
        if !can_go_back {
            return false;
        }
        self.with_surface("go_back", |s| s.go_back())
    }

    /// The user asked to leave the offline panel.
    pub fn retry(&mut self) {
        if self.is_torn_down() || !self.progress.on_retry() {
            debug!("retry ignored, shell is not offline");
            return;
        }
        info!("retrying from offline panel");
        self.apply_cache_policy();
        self.ui.show_offline_panel(false);
        self.with_surface("set_visible", |s| s.set_visible(true));
        self.ui.set_progress(0);
        self.ui.show_loading_overlay(true);

        let home = self.scope.home_url().to_string();
        self.with_surface("load_url", |s| s.load_url(&home));
    }

    /// Run deferred work whose deadline has passed.
    pub fn run_deferred(&mut self, now: Instant) {
        match self.deferred.take_due(now) {
            Some(DeferredAction::GoBack) => {
                debug!("running deferred back navigation");
                self.on_back_requested();
            }
            None => {}
        }
    }

    /// When the host should next call [`Self::run_deferred`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.deadline()
    }

    /// Cancel pending work and release the surface. Idempotent.
    pub fn shutdown(&mut self) {
        if self.deferred.cancel() {
            debug!("cancelled pending deferred action");
        }
        if self.surface.take().is_some() {
            info!("shell controller shut down");
        }
    }

    fn apply_cache_policy(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.cache.apply_to_surface(surface);
        }
    }
}
