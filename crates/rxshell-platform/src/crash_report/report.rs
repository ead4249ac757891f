use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_report_text;

/// Write a JSON crash report for a panic.
///
/// Runs inside the panic hook, so every failure is swallowed and reported
/// as `None`. On Unix the file is owner read/write only.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let now = chrono::Utc::now();
    let dir = crash_report_dir().ok()?;
    let path = dir.join(format!("crash_{}.json", now.format("%Y%m%d_%H%M%S")));

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    let report = serde_json::json!({
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_report_text(&message),
        "location": location,
        "backtrace": sanitize_report_text(&backtrace),
    });

    let _ = std::fs::create_dir_all(&dir);
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
