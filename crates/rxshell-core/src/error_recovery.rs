//! Load error classification.
//!
//! The browser reports failures through one of two contracts: a legacy
//! one that fires once per failed page, and a modern one that fires for
//! every failed resource with a main-document flag. Exactly one contract
//! is active; both end up in [`ErrorRecoveryHandler::handle`].

use std::time::Duration;

use rxshell_common::LoadErrorCode;
use tracing::{debug, info};

/// Error-reporting contract fed into the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContract {
    Legacy,
    Modern,
}

impl ErrorContract {
    /// An explicit preference wins; otherwise use the modern contract
    /// whenever the surface can report per-resource failures.
    pub fn select(preferred: Option<ErrorContract>, modern_supported: bool) -> Self {
        match preferred {
            Some(ErrorContract::Modern) if !modern_supported => {
                info!("modern error contract requested but unsupported, using legacy");
                ErrorContract::Legacy
            }
            Some(contract) => contract,
            None if modern_supported => ErrorContract::Modern,
            None => ErrorContract::Legacy,
        }
    }
}

/// What the controller should do about one error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// Sub-resource failure; the page itself is fine.
    Ignored,
    /// Benign scheme failure; go back after `delay`.
    RecoverBack { delay: Duration },
    /// Show the offline panel.
    GoOffline,
}

#[derive(Debug, Clone)]
pub struct ErrorRecoveryHandler {
    contract: ErrorContract,
    back_delay: Duration,
}

impl ErrorRecoveryHandler {
    pub fn new(contract: ErrorContract, back_delay: Duration) -> Self {
        Self {
            contract,
            back_delay,
        }
    }

    pub fn contract(&self) -> ErrorContract {
        self.contract
    }

    /// Whether signals from `contract` are routed into `handle`.
    pub fn accepts(&self, contract: ErrorContract) -> bool {
        self.contract == contract
    }

    pub fn handle(&self, code: LoadErrorCode, is_main_document: bool) -> ErrorOutcome {
        if !is_main_document {
            debug!(%code, "sub-resource load error ignored");
            return ErrorOutcome::Ignored;
        }
        if code.is_unsupported_scheme() {
            debug!("unsupported scheme in main frame, recovering with back navigation");
            return ErrorOutcome::RecoverBack {
                delay: self.back_delay,
            };
        }
        info!(%code, "main document failed to load");
        ErrorOutcome::GoOffline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: &[LoadErrorCode] = &[
        LoadErrorCode::Unknown,
        LoadErrorCode::HostLookup,
        LoadErrorCode::UnsupportedAuthScheme,
        LoadErrorCode::Authentication,
        LoadErrorCode::ProxyAuthentication,
        LoadErrorCode::Connect,
        LoadErrorCode::Io,
        LoadErrorCode::Timeout,
        LoadErrorCode::RedirectLoop,
        LoadErrorCode::UnsupportedScheme,
        LoadErrorCode::FailedSslHandshake,
        LoadErrorCode::BadUrl,
        LoadErrorCode::File,
        LoadErrorCode::FileNotFound,
        LoadErrorCode::TooManyRequests,
        LoadErrorCode::UnsafeResource,
    ];

    fn handler() -> ErrorRecoveryHandler {
        ErrorRecoveryHandler::new(ErrorContract::Modern, Duration::from_millis(100))
    }

    #[test]
    fn sub_resource_errors_are_always_ignored() {
        let h = handler();
        for code in ALL_CODES {
            assert_eq!(h.handle(*code, false), ErrorOutcome::Ignored, "{code}");
        }
    }

    #[test]
    fn unsupported_scheme_recovers_with_back() {
        assert_eq!(
            handler().handle(LoadErrorCode::UnsupportedScheme, true),
            ErrorOutcome::RecoverBack {
                delay: Duration::from_millis(100)
            }
        );
    }

    #[test]
    fn every_other_main_document_error_goes_offline() {
        let h = handler();
        for code in ALL_CODES.iter().filter(|c| !c.is_unsupported_scheme()) {
            assert_eq!(h.handle(*code, true), ErrorOutcome::GoOffline, "{code}");
        }
    }

    #[test]
    fn contract_selection() {
        assert_eq!(ErrorContract::select(None, true), ErrorContract::Modern);
        assert_eq!(ErrorContract::select(None, false), ErrorContract::Legacy);
        assert_eq!(
            ErrorContract::select(Some(ErrorContract::Legacy), true),
            ErrorContract::Legacy
        );
        assert_eq!(
            ErrorContract::select(Some(ErrorContract::Modern), false),
            ErrorContract::Legacy
        );
    }

    #[test]
    fn accepts_only_active_contract() {
        let h = handler();
        assert!(h.accepts(ErrorContract::Modern));
        assert!(!h.accepts(ErrorContract::Legacy));
    }
}
