use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DeepLinkError;

/// Why the host launched the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchAction {
    /// Plain launch from the launcher / desktop entry.
    Main,
    /// An external request to view a specific URL.
    View,
}

impl FromStr for LaunchAction {
    type Err = DeepLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "android.intent.action.main" => Ok(Self::Main),
            "view" | "android.intent.action.view" => Ok(Self::View),
            other => Err(DeepLinkError::UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_intent_names() {
        assert_eq!("view".parse::<LaunchAction>().unwrap(), LaunchAction::View);
        assert_eq!(
            "android.intent.action.VIEW".parse::<LaunchAction>().unwrap(),
            LaunchAction::View
        );
        assert_eq!(" Main ".parse::<LaunchAction>().unwrap(), LaunchAction::Main);
    }

    #[test]
    fn rejects_unknown_action() {
        let err = "share".parse::<LaunchAction>().unwrap_err();
        assert!(matches!(err, DeepLinkError::UnknownAction(ref a) if a == "share"));
    }
}
