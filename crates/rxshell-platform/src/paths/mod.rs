mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, crash_report_dir, data_dir, webview_data_dir};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_rxshell() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("rxshell"),
            "config_dir should end with 'rxshell', got: {path:?}"
        );
    }

    #[test]
    fn webview_data_lives_in_data_dir() {
        let webview = webview_data_dir().unwrap();
        let data = data_dir().unwrap();
        assert!(webview.starts_with(&data));
        assert_eq!(webview.file_name().unwrap(), "webview");
    }

    #[test]
    fn crash_reports_live_under_logs() {
        let crash = crash_report_dir().unwrap();
        assert!(crash.starts_with(super::resolve::log_dir().unwrap()));
        assert_eq!(crash.file_name().unwrap(), "crash-reports");
    }
}
