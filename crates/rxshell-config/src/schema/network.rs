//! Network agent and error-reporting configuration.

use serde::{Deserialize, Serialize};

/// Which browser error-reporting contract feeds the controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ErrorContractSetting {
    /// Pick by capability detection at startup.
    #[default]
    Auto,
    /// One error per page.
    Legacy,
    /// One error per resource, with a main-document flag.
    Modern,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Replace the engine's user agent with `user_agent`.
    pub override_user_agent: bool,
    pub user_agent: String,
    /// Append `user_agent_postfix` to the (possibly overridden) user agent.
    pub postfix_user_agent: bool,
    pub user_agent_postfix: String,
    /// Lenient mixed-content loading. wry exposes no such switch, so the
    /// engine's own policy applies and the flag is only logged.
    pub mixed_content: bool,
    pub error_contract: ErrorContractSetting,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            override_user_agent: false,
            user_agent: String::new(),
            postfix_user_agent: true,
            user_agent_postfix: format!("rxshell/{}", env!("CARGO_PKG_VERSION")),
            mixed_content: false,
            error_contract: ErrorContractSetting::Auto,
        }
    }
}

impl NetworkConfig {
    /// Compose the user agent from the engine default.
    ///
    /// `None` means "leave the engine default alone".
    pub fn user_agent(&self, engine_default: Option<&str>) -> Option<String> {
        let mut agent = engine_default.map(str::to_string);
        if self.override_user_agent {
            agent = Some(self.user_agent.clone());
        }
        if self.postfix_user_agent {
            agent = Some(match agent {
                Some(base) if !base.is_empty() => format!("{base} {}", self.user_agent_postfix),
                _ => self.user_agent_postfix.clone(),
            });
        }
        agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_postfix_only() {
        let net = NetworkConfig::default();
        let ua = net.user_agent(Some("Engine/1.0")).unwrap();
        assert!(ua.starts_with("Engine/1.0 rxshell/"));
    }

    #[test]
    fn override_replaces_engine_default() {
        let net = NetworkConfig {
            override_user_agent: true,
            user_agent: "Custom/2.0".into(),
            postfix_user_agent: false,
            ..Default::default()
        };
        assert_eq!(net.user_agent(Some("Engine/1.0")).as_deref(), Some("Custom/2.0"));
    }

    #[test]
    fn override_and_postfix_combine() {
        let net = NetworkConfig {
            override_user_agent: true,
            user_agent: "Custom/2.0".into(),
            postfix_user_agent: true,
            user_agent_postfix: "Shell".into(),
            ..Default::default()
        };
        assert_eq!(
            net.user_agent(None).as_deref(),
            Some("Custom/2.0 Shell")
        );
    }

    #[test]
    fn no_flags_keeps_engine_default() {
        let net = NetworkConfig {
            postfix_user_agent: false,
            ..Default::default()
        };
        assert_eq!(net.user_agent(None), None);
        assert_eq!(net.user_agent(Some("Engine/1.0")).as_deref(), Some("Engine/1.0"));
    }
}
