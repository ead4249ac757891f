use std::path::PathBuf;

use rxshell_common::PlatformError;

pub(super) const APP_NAME: &str = "rxshell";

/// Platform configuration directory for the shell.
///
/// - macOS: `~/Library/Application Support/rxshell`
/// - Linux: `$XDG_CONFIG_HOME/rxshell` (defaults to `~/.config/rxshell`)
/// - Windows: `%APPDATA%\rxshell`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for the shell.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Browser storage (cookies, local storage, HTTP cache) for the hosted app.
/// Handed to the content webview's `WebContext`.
pub fn webview_data_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("webview"))
}

pub(super) fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
