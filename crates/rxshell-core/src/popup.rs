//! Popup / new-window filter.

use url::Url;

/// Fate of a request to open a secondary browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupOutcome {
    /// Load the target in the existing surface instead.
    Redirect(String),
    /// No concrete target: typical of hijack and pop-under scripts.
    Discard,
}

/// Resolve the href of the anchor that asked for a new window.
pub fn filter_popup(href: Option<&str>) -> PopupOutcome {
    let Some(href) = href.map(str::trim).filter(|h| !h.is_empty()) else {
        return PopupOutcome::Discard;
    };
    match Url::parse(href) {
        Ok(url) if !matches!(url.scheme(), "about" | "javascript" | "data" | "blob") => {
            PopupOutcome::Redirect(href.to_string())
        }
        _ => PopupOutcome::Discard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_href_is_redirected() {
        assert_eq!(
            filter_popup(Some("https://ads.example/x")),
            PopupOutcome::Redirect("https://ads.example/x".into())
        );
        assert_eq!(
            filter_popup(Some("  https://app.example/share ")),
            PopupOutcome::Redirect("https://app.example/share".into())
        );
    }

    #[test]
    fn missing_href_is_discarded() {
        assert_eq!(filter_popup(None), PopupOutcome::Discard);
        assert_eq!(filter_popup(Some("")), PopupOutcome::Discard);
        assert_eq!(filter_popup(Some("   ")), PopupOutcome::Discard);
    }

    #[test]
    fn script_and_blank_targets_are_discarded() {
        assert_eq!(filter_popup(Some("about:blank")), PopupOutcome::Discard);
        assert_eq!(filter_popup(Some("javascript:void(0)")), PopupOutcome::Discard);
        assert_eq!(filter_popup(Some("data:text/html,hi")), PopupOutcome::Discard);
        assert_eq!(filter_popup(Some("/relative/path")), PopupOutcome::Discard);
    }
}
