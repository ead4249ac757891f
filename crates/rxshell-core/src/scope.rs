//! Hosted app scope and navigation classification.

use rxshell_common::ShellError;
use url::Url;

/// URL prefix boundary of the hosted web application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedAppScope {
    home_url: String,
    host_marker: String,
}

/// What to do with one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    LoadInPlace,
    HandOffExternal,
    SuppressPopup,
}

impl HostedAppScope {
    /// `home_url` must be an absolute URL and `host_marker` must occur in it.
    pub fn new(
        home_url: impl Into<String>,
        host_marker: impl Into<String>,
    ) -> Result<Self, ShellError> {
        let home_url = home_url.into();
        let host_marker = host_marker.into();

        Url::parse(&home_url)
            .map_err(|e| ShellError::Scope(format!("home_url '{home_url}': {e}")))?;
        if host_marker.is_empty() {
            return Err(ShellError::Scope("host_marker is empty".into()));
        }
        if !home_url.contains(&host_marker) {
            return Err(ShellError::Scope(format!(
                "host_marker '{host_marker}' not found in '{home_url}'"
            )));
        }

        Ok(Self {
            home_url,
            host_marker,
        })
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn host_marker(&self) -> &str {
        &self.host_marker
    }

    /// Prefix check against the home URL. Empty URLs never match.
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.home_url)
    }

    /// Classify a navigation start.
    ///
    /// `LoadInPlace` iff `url` starts with the home URL; everything else,
    /// including empty and unparsable input, is handed off.
    pub fn classify(&self, url: &str) -> NavigationDecision {
        if self.contains(url) {
            NavigationDecision::LoadInPlace
        } else {
            NavigationDecision::HandOffExternal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> HostedAppScope {
        HostedAppScope::new("https://app.example/", "app.example").unwrap()
    }

    #[test]
    fn in_scope_urls_load_in_place() {
        let s = scope();
        assert_eq!(s.classify("https://app.example/"), NavigationDecision::LoadInPlace);
        assert_eq!(
            s.classify("https://app.example/builder/resume-1"),
            NavigationDecision::LoadInPlace
        );
        assert_eq!(
            s.classify("https://app.example/?lang=de#top"),
            NavigationDecision::LoadInPlace
        );
    }

    #[test]
    fn out_of_scope_urls_hand_off() {
        let s = scope();
        for url in [
            "https://other.example/",
            "http://app.example/",
            "https://app.example.evil.com/",
            "https://app.example",
            "mailto:someone@app.example",
            "tel:+4912345",
        ] {
            assert_eq!(s.classify(url), NavigationDecision::HandOffExternal, "{url}");
        }
    }

    #[test]
    fn empty_and_garbage_are_external() {
        let s = scope();
        assert_eq!(s.classify(""), NavigationDecision::HandOffExternal);
        assert_eq!(s.classify("   "), NavigationDecision::HandOffExternal);
        assert_eq!(s.classify("not a url"), NavigationDecision::HandOffExternal);
    }

    #[test]
    fn classification_is_order_independent() {
        let s = scope();
        let urls = ["https://other.example/", "https://app.example/a", ""];
        let first: Vec<_> = urls.iter().map(|u| s.classify(u)).collect();
        let second: Vec<_> = urls.iter().rev().map(|u| s.classify(u)).collect();
        let second: Vec<_> = second.into_iter().rev().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_invalid_scopes() {
        assert!(HostedAppScope::new("not a url", "x").is_err());
        assert!(HostedAppScope::new("https://app.example/", "").is_err());
        assert!(HostedAppScope::new("https://app.example/", "other.example").is_err());
    }
}
