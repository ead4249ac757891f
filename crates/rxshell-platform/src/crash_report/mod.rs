mod report;
mod sanitize;

pub use report::write_crash_report;
pub use sanitize::sanitize_report_text;
