use std::fs;

use rxshell_common::PlatformError;

use super::resolve::{config_dir, crash_report_dir, webview_data_dir};

/// Create every shell directory that does not exist yet.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [
        config_dir()?,
        webview_data_dir()?,
        crash_report_dir()?,
    ] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
