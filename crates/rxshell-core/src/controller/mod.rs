//! Composition root: wires the shell components around one browser surface.
//!
//! All entry points run on the UI thread, one callback at a time. Once
//! [`ShellController::shutdown`] has run the surface reference is gone and
//! every entry point becomes a no-op.

use std::time::Duration;

use rxshell_common::SurfaceError;
use tracing::warn;

use crate::cache_policy::CachePolicyController;
use crate::connectivity::ConnectivityProbe;
use crate::deep_link::DeepLinkResolver;
use crate::deferred::DeferredTask;
use crate::error_recovery::{ErrorContract, ErrorRecoveryHandler};
use crate::progress::LoadProgress;
use crate::scope::HostedAppScope;
use crate::surface::{BrowserSurface, ExternalDispatcher, ShellUi};

mod handlers;
mod lifecycle;


/// Values fixed at configuration time.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub scope: HostedAppScope,
    pub completion_threshold: u8,
    pub back_delay: Duration,
    pub error_contract: ErrorContract,
}

impl ShellSettings {
    pub fn new(scope: HostedAppScope) -> Self {
        Self {
            scope,
            completion_threshold: 100,
            back_delay: Duration::from_millis(100),
            error_contract: ErrorContract::Modern,
        }
    }
}

pub struct ShellController<S, U, P, D> {
    scope: HostedAppScope,
    surface: Option<S>,
    ui: U,
    dispatcher: D,
    cache: CachePolicyController<P>,
    progress: LoadProgress,
    errors: ErrorRecoveryHandler,
    deep_link: DeepLinkResolver,
    deferred: DeferredTask,
}

impl<S, U, P, D> ShellController<S, U, P, D>
where
    S: BrowserSurface,
    U: ShellUi,
    P: ConnectivityProbe,
    D: ExternalDispatcher,
{
    pub fn new(settings: ShellSettings, surface: S, ui: U, probe: P, dispatcher: D) -> Self {
        Self {
            progress: LoadProgress::new(settings.completion_threshold),
            errors: ErrorRecoveryHandler::new(settings.error_contract, settings.back_delay),
            scope: settings.scope,
            surface: Some(surface),
            ui,
            dispatcher,
            cache: CachePolicyController::new(probe),
            deep_link: DeepLinkResolver::new(),
            deferred: DeferredTask::new(),
        }
    }

    pub fn scope(&self) -> &HostedAppScope {
        &self.scope
    }

    pub fn load_progress(&self) -> &LoadProgress {
        &self.progress
    }

    pub fn is_loaded(&self) -> bool {
        self.progress.is_loaded()
    }

    pub fn error_contract(&self) -> ErrorContract {
        self.errors.contract()
    }

    pub fn cache_mode(&self) -> Option<rxshell_common::CacheMode> {
        self.cache.current_mode()
    }

    pub fn is_torn_down(&self) -> bool {
        self.surface.is_none()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Run one surface operation, logging failures. No-op after teardown.
    fn with_surface(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut S) -> Result<(), SurfaceError>,
    ) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        match f(surface) {
            Ok(()) => true,
            Err(e) => {
                warn!(op, error = %e, "browser surface operation failed");
                false
            }
        }
    }
}
