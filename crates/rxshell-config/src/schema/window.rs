//! Host window configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Enable the engine's inspector (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Reactive Resume".into(),
            width: 1280,
            height: 800,
            devtools: false,
        }
    }
}
