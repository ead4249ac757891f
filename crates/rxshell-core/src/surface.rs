//! Outbound capabilities the controller drives.

use rxshell_common::{CacheMode, SurfaceError};

/// The embedded browser the shell hosts the web app in.
pub trait BrowserSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;
    fn stop_loading(&mut self) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;
    fn go_back(&mut self) -> Result<(), SurfaceError>;
    fn can_go_back(&self) -> bool;
    fn set_cache_mode(&mut self, mode: CacheMode) -> Result<(), SurfaceError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError>;
    fn pause(&mut self) -> Result<(), SurfaceError>;
    fn resume(&mut self) -> Result<(), SurfaceError>;
}

/// Native UI around the browser surface: progress bar, loading overlay,
/// offline panel and the "no application" notice.
pub trait ShellUi {
    /// `progress` is in `0..=100`; values below 100 keep the bar visible.
    fn set_progress(&mut self, progress: u8);
    fn show_loading_overlay(&mut self, visible: bool);
    fn show_offline_panel(&mut self, visible: bool);
    fn show_no_handler_notice(&mut self);
}

/// Hands a URL to whatever the OS registers for it.
pub trait ExternalDispatcher {
    /// Returns `false` when no handler resolved.
    fn dispatch_external_view(&mut self, url: &str) -> bool;
}
