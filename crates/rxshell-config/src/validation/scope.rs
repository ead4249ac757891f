//! Validation for the hosted app scope.

use url::Url;

use crate::schema::ShellConfig;

/// `home_url` must be an absolute http(s) URL containing `host_marker`.
pub(crate) fn validate_app(errors: &mut Vec<String>, config: &ShellConfig) {
    let app = &config.app;

    match Url::parse(&app.home_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(format!(
            "app.home_url scheme '{}' is not http or https",
            url.scheme()
        )),
        Err(e) => errors.push(format!("app.home_url '{}' is not a valid URL: {e}", app.home_url)),
    }

    if app.host_marker.trim().is_empty() {
        errors.push("app.host_marker must not be empty".into());
    } else if !app.home_url.contains(&app.host_marker) {
        errors.push(format!(
            "app.host_marker '{}' does not occur in app.home_url '{}'",
            app.host_marker, app.home_url
        ));
    }
}
