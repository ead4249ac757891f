//! Load progress UI configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Progress value (1-100) at which the loading overlay is dismissed.
    pub completion_threshold: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            completion_threshold: 100,
        }
    }
}
