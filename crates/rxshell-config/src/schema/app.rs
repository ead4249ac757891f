//! Hosted application scope configuration.

use serde::{Deserialize, Serialize};

/// The single web application the shell hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start page; every in-scope URL starts with this prefix.
    pub home_url: String,
    /// Substring a deep link must contain to be accepted.
    pub host_marker: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home_url: "https://rxresu.me/".into(),
            host_marker: "rxresu.me".into(),
        }
    }
}
