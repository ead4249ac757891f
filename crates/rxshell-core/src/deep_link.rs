//! Start URL selection from an external launch request.

use rxshell_common::{DeepLinkError, LaunchAction};
use tracing::{debug, info};
use url::Url;

use crate::scope::HostedAppScope;

/// Inspected launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub action: Option<LaunchAction>,
    pub uri: Option<String>,
}

impl LaunchRequest {
    /// Inspect raw launch data. Blank values count as absent.
    pub fn parse(action: Option<&str>, uri: Option<&str>) -> Result<Self, DeepLinkError> {
        let action = action
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::parse::<LaunchAction>)
            .transpose()?;

        let uri = match uri.map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => {
                Url::parse(raw).map_err(|e| DeepLinkError::MalformedUri(format!("{raw}: {e}")))?;
                Some(raw.to_string())
            }
            None => None,
        };

        Ok(Self { action, uri })
    }

    /// The URI of an external "view" request, if this is one.
    pub fn view_uri(&self) -> Option<&str> {
        match (&self.action, &self.uri) {
            (Some(LaunchAction::View), Some(uri)) => Some(uri),
            _ => None,
        }
    }
}

/// Picks the start URL once per process.
#[derive(Debug, Default)]
pub struct DeepLinkResolver {
    consumed: bool,
}

impl DeepLinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Home URL unless this is the first call and the launch request is a
    /// "view" of a URL carrying the scope's host marker. Malformed launch
    /// data counts as no deep link.
    pub fn resolve_start_url(
        &mut self,
        action: Option<&str>,
        uri: Option<&str>,
        scope: &HostedAppScope,
    ) -> String {
        if self.consumed {
            debug!("deep link already consumed, using home");
            return scope.home_url().to_string();
        }
        self.consumed = true;

        let request = match LaunchRequest::parse(action, uri) {
            Ok(request) => request,
            Err(e) => {
                info!(error = %e, "ignoring malformed launch request");
                return scope.home_url().to_string();
            }
        };

        match request.view_uri() {
            Some(link) if link.contains(scope.host_marker()) => {
                info!(url = %link, "starting from deep link");
                link.to_string()
            }
            Some(link) => {
                info!(url = %link, "deep link outside hosted app, using home");
                scope.home_url().to_string()
            }
            None => scope.home_url().to_string(),
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
    fn no_launch_request_uses_home() {
        let mut r = DeepLinkResolver::new();
        assert_eq!(r.resolve_start_url(None, None, &scope()), "https://app.example/");
    }

    #[test]
    fn view_request_with_marker_is_used() {
        let mut r = DeepLinkResolver::new();
        assert_eq!(
            r.resolve_start_url(Some("view"), Some("https://app.example/r/jane"), &scope()),
            "https://app.example/r/jane"
        );
    }

    #[test]
    fn second_resolution_yields_home() {
        let mut r = DeepLinkResolver::new();
        let link = Some("https://app.example/r/jane");
        assert_eq!(
            r.resolve_start_url(Some("view"), link, &scope()),
            "https://app.example/r/jane"
        );
        assert!(r.is_consumed());
        assert_eq!(
            r.resolve_start_url(Some("view"), link, &scope()),
            "https://app.example/"
        );
    }

    #[test]
    fn foreign_host_falls_back_to_home() {
        let mut r = DeepLinkResolver::new();
        assert_eq!(
            r.resolve_start_url(Some("view"), Some("https://evil.example/"), &scope()),
            "https://app.example/"
        );
    }

    #[test]
    fn main_action_ignores_uri() {
        let mut r = DeepLinkResolver::new();
        assert_eq!(
            r.resolve_start_url(Some("main"), Some("https://app.example/r/jane"), &scope()),
            "https://app.example/"
        );
    }

    #[test]
    fn view_without_uri_uses_home() {
        let mut r = DeepLinkResolver::new();
        assert_eq!(
            r.resolve_start_url(Some("view"), Some("  "), &scope()),
            "https://app.example/"
        );
    }

    #[test]
    fn malformed_request_uses_home() {
        let mut r = DeepLinkResolver::new();
        assert_eq!(
            r.resolve_start_url(Some("view"), Some("::not a uri::"), &scope()),
            "https://app.example/"
        );
        let mut r = DeepLinkResolver::new();
        assert_eq!(
            r.resolve_start_url(Some("share"), Some("https://app.example/x"), &scope()),
            "https://app.example/"
        );
    }

    #[test]
    fn parse_reports_errors() {
        assert!(matches!(
            LaunchRequest::parse(Some("bogus"), None),
            Err(DeepLinkError::UnknownAction(_))
        ));
        assert!(matches!(
            LaunchRequest::parse(Some("view"), Some("no scheme here")),
            Err(DeepLinkError::MalformedUri(_))
        ));
        let req = LaunchRequest::parse(None, None).unwrap();
        assert_eq!(req.view_uri(), None);
    }
}
