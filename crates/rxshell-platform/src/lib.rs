pub mod connectivity;
pub mod crash_report;
pub mod dispatch;
pub mod paths;

pub use connectivity::{SystemConnectivityProbe, Transport};
pub use dispatch::SystemDispatcher;
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, webview_data_dir};
