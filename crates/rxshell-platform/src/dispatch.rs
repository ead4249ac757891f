//! Hand URLs to the operating system.

use rxshell_common::PlatformError;
use rxshell_core::ExternalDispatcher;
use tracing::{info, warn};

/// Open `url` with the OS default handler.
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(PlatformError::DispatchError("empty url".into()));
    }
    open::that(url).map_err(|e| PlatformError::DispatchError(format!("{url}: {e}")))
}

/// [`ExternalDispatcher`] backed by the desktop's URL handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDispatcher;

impl SystemDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl ExternalDispatcher for SystemDispatcher {
    fn dispatch_external_view(&mut self, url: &str) -> bool {
        match open_external(url) {
            Ok(()) => {
                info!(url = %url, "opened with system handler");
                true
            }
            Err(e) => {
                warn!(error = %e, "no system handler for url");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected_without_spawning() {
        assert!(matches!(
            open_external("   "),
            Err(PlatformError::DispatchError(_))
        ));
        assert!(!SystemDispatcher::new().dispatch_external_view(""));
    }
}
