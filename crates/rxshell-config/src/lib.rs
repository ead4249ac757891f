//! rxshell configuration system.
//!
//! Provides TOML-based configuration for the hosted app scope, progress
//! UI, network behaviour, recovery timing, window and logging. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rxshell_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ShellConfig, CONFIG_SCHEMA_VERSION};

use rxshell_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"app\""));
        assert!(json.contains("\"progress\""));
        assert!(json.contains("\"network\""));
        assert!(json.contains("\"recovery\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        let parsed: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.app.home_url, "https://rxresu.me/");
        assert_eq!(parsed.progress.completion_threshold, 100);
        assert_eq!(parsed.recovery.back_delay_ms, 100);
    }
}
