//! Cache strategy selection from connectivity.

use rxshell_common::CacheMode;
use tracing::{debug, warn};

use crate::connectivity::ConnectivityProbe;
use crate::surface::BrowserSurface;

/// Picks and applies the surface cache mode from a fresh connectivity probe.
pub struct CachePolicyController<P> {
    probe: P,
    current: Option<CacheMode>,
}

impl<P: ConnectivityProbe> CachePolicyController<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            current: None,
        }
    }

    /// Offline devices read from cache; connected devices fetch live content.
    pub fn select_mode(available: bool) -> CacheMode {
        if available {
            CacheMode::PreferNetwork
        } else {
            CacheMode::PreferCache
        }
    }

    /// Probe, select, and push the mode to the surface.
    pub fn apply_to_surface<S: BrowserSurface>(&mut self, surface: &mut S) -> CacheMode {
        let available = self.probe.is_available();
        let mode = Self::select_mode(available);
        debug!(available, %mode, "cache mode selected");
        if let Err(e) = surface.set_cache_mode(mode) {
            warn!(%mode, error = %e, "failed to apply cache mode");
        }
        self.current = Some(mode);
        mode
    }

    /// Last mode applied, if any.
    pub fn current_mode(&self) -> Option<CacheMode> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Probe = fn() -> bool;

    #[test]
    fn select_mode_is_pure() {
        assert_eq!(
            CachePolicyController::<Probe>::select_mode(false),
            CacheMode::PreferCache
        );
        assert_eq!(
            CachePolicyController::<Probe>::select_mode(true),
            CacheMode::PreferNetwork
        );
    }

    #[test]
    fn select_mode_ignores_prior_mode() {
        let probe: Probe = || true;
        let mut policy = CachePolicyController::new(probe);
        policy.current = Some(CacheMode::PreferCache);
        assert_eq!(
            CachePolicyController::<Probe>::select_mode(true),
            CacheMode::PreferNetwork
        );
        policy.current = Some(CacheMode::PreferNetwork);
        assert_eq!(
            CachePolicyController::<Probe>::select_mode(false),
            CacheMode::PreferCache
        );
    }

    #[test]
    fn no_mode_before_first_apply() {
        let probe: Probe = || false;
        let policy = CachePolicyController::new(probe);
        assert_eq!(policy.current_mode(), None);
    }
}
