use std::sync::LazyLock;

use regex::Regex;

// Static patterns; compilation cannot fail.
static URL_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\b[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s?#"'<>]*)[?#][^\s"'<>]*"#)
        .expect("crash_report: static regex pattern must compile")
});
static BEARER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer [a-zA-Z0-9._\-]+").expect("crash_report: static regex pattern must compile")
});

/// Strip URL query strings and fragments (deep links can carry share
/// tokens) and bearer tokens from text headed for a crash report.
pub fn sanitize_report_text(input: &str) -> String {
    let result = URL_TAIL.replace_all(input, "${1}[REDACTED]");
    BEARER.replace_all(&result, "Bearer [REDACTED]").into_owned()
}
