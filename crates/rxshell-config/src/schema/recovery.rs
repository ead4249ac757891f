//! Error recovery timing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Delay before the back-navigation that recovers from an
    /// unsupported-scheme load (valid range: 0-2000 ms).
    pub back_delay_ms: u32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self { back_delay_ms: 100 }
    }
}
