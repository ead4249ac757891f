//! Normalized browser-surface callbacks.

use rxshell_common::LoadErrorCode;

/// One callback from the browser surface (or its chrome), in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    NavigationStarted { url: String },
    Progress(u8),
    /// One error per page.
    LegacyError { code: LoadErrorCode },
    /// One error per resource.
    ModernError {
        code: LoadErrorCode,
        main_document: bool,
    },
    /// `href` is `None` when the requesting anchor could not be resolved.
    PopupRequested { href: Option<String> },
    /// The user tapped the offline panel.
    RetryRequested,
}
