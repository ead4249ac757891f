//! Configuration schema types for rxshell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod network;
mod progress;
mod recovery;
mod system;
mod window;

pub use app::*;
pub use network::*;
pub use progress::*;
pub use recovery::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the shell.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShellConfig {
    pub app: AppConfig,
    pub progress: ProgressConfig,
    pub network: NetworkConfig,
    pub recovery: RecoveryConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
