use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy the browser surface uses when retrieving resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Serve stored responses when present, go to the network otherwise.
    PreferCache,
    /// Normal HTTP semantics: fetch live content, revalidating the cache.
    PreferNetwork,
}

impl CacheMode {
    /// Token announced to the hosted page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreferCache => "prefer-cache",
            Self::PreferNetwork => "prefer-network",
        }
    }
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
