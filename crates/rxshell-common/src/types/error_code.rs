use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized load failure reported by the browser surface.
///
/// Both error contracts map into this type: the legacy contract reports
/// small negative integers, the modern one reports network error names
/// such as `ERR_CONNECTION_REFUSED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorCode {
    Unknown,
    HostLookup,
    UnsupportedAuthScheme,
    Authentication,
    ProxyAuthentication,
    Connect,
    Io,
    Timeout,
    RedirectLoop,
    UnsupportedScheme,
    FailedSslHandshake,
    BadUrl,
    File,
    FileNotFound,
    TooManyRequests,
    UnsafeResource,
}

impl LoadErrorCode {
    /// Map a legacy integer code. Unrecognized values become `Unknown`.
    pub fn from_legacy(code: i32) -> Self {
        match code {
            -2 => Self::HostLookup,
            -3 => Self::UnsupportedAuthScheme,
            -4 => Self::Authentication,
            -5 => Self::ProxyAuthentication,
            -6 => Self::Connect,
            -7 => Self::Io,
            -8 => Self::Timeout,
            -9 => Self::RedirectLoop,
            -10 => Self::UnsupportedScheme,
            -11 => Self::FailedSslHandshake,
            -12 => Self::BadUrl,
            -13 => Self::File,
            -14 => Self::FileNotFound,
            -15 => Self::TooManyRequests,
            -16 => Self::UnsafeResource,
            _ => Self::Unknown,
        }
    }

    /// Map a network error name (with or without the `net::` prefix).
    pub fn from_net_error(name: &str) -> Self {
        let name = name.trim();
        let name = name.strip_prefix("net::").unwrap_or(name);
        match name {
            "ERR_NAME_NOT_RESOLVED" | "ERR_NAME_RESOLUTION_FAILED" => Self::HostLookup,
            "ERR_CONNECTION_REFUSED"
            | "ERR_CONNECTION_RESET"
            | "ERR_CONNECTION_CLOSED"
            | "ERR_CONNECTION_FAILED"
            | "ERR_ADDRESS_UNREACHABLE"
            | "ERR_INTERNET_DISCONNECTED"
            | "ERR_NETWORK_CHANGED" => Self::Connect,
            "ERR_TIMED_OUT" | "ERR_CONNECTION_TIMED_OUT" => Self::Timeout,
            "ERR_TOO_MANY_REDIRECTS" => Self::RedirectLoop,
            "ERR_UNKNOWN_URL_SCHEME" | "ERR_DISALLOWED_URL_SCHEME" => Self::UnsupportedScheme,
            "ERR_INVALID_URL" => Self::BadUrl,
            "ERR_FILE_NOT_FOUND" => Self::FileNotFound,
            "ERR_ACCESS_DENIED" => Self::File,
            "ERR_INVALID_AUTH_CREDENTIALS" => Self::Authentication,
            "ERR_PROXY_AUTH_REQUESTED" => Self::ProxyAuthentication,
            "ERR_UNSUPPORTED_AUTH_SCHEME" => Self::UnsupportedAuthScheme,
            "ERR_BLOCKED_BY_CLIENT" | "ERR_BLOCKED_BY_RESPONSE" => Self::UnsafeResource,
            n if n.starts_with("ERR_SSL_") || n.starts_with("ERR_CERT_") => {
                Self::FailedSslHandshake
            }
            "ERR_CONTENT_LENGTH_MISMATCH" | "ERR_INCOMPLETE_CHUNKED_ENCODING" => Self::Io,
            _ => Self::Unknown,
        }
    }

    /// A `tel:`/`mailto:`-style link routed into the main frame.
    pub fn is_unsupported_scheme(&self) -> bool {
        matches!(self, Self::UnsupportedScheme)
    }
}

impl fmt::Display for LoadErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_map() {
        assert_eq!(LoadErrorCode::from_legacy(-10), LoadErrorCode::UnsupportedScheme);
        assert_eq!(LoadErrorCode::from_legacy(-2), LoadErrorCode::HostLookup);
        assert_eq!(LoadErrorCode::from_legacy(-6), LoadErrorCode::Connect);
        assert_eq!(LoadErrorCode::from_legacy(-1), LoadErrorCode::Unknown);
        assert_eq!(LoadErrorCode::from_legacy(42), LoadErrorCode::Unknown);
    }

    #[test]
    fn net_error_names_map() {
        assert_eq!(
            LoadErrorCode::from_net_error("ERR_CONNECTION_REFUSED"),
            LoadErrorCode::Connect
        );
        assert_eq!(
            LoadErrorCode::from_net_error("net::ERR_UNKNOWN_URL_SCHEME"),
            LoadErrorCode::UnsupportedScheme
        );
        assert_eq!(
            LoadErrorCode::from_net_error("ERR_CERT_DATE_INVALID"),
            LoadErrorCode::FailedSslHandshake
        );
        assert_eq!(
            LoadErrorCode::from_net_error("ERR_TIMED_OUT"),
            LoadErrorCode::Timeout
        );
        assert_eq!(LoadErrorCode::from_net_error(""), LoadErrorCode::Unknown);
        assert_eq!(
            LoadErrorCode::from_net_error("something else"),
            LoadErrorCode::Unknown
        );
    }

    #[test]
    fn only_unsupported_scheme_is_benign() {
        assert!(LoadErrorCode::UnsupportedScheme.is_unsupported_scheme());
        assert!(!LoadErrorCode::UnsupportedAuthScheme.is_unsupported_scheme());
        assert!(!LoadErrorCode::Connect.is_unsupported_scheme());
    }
}
