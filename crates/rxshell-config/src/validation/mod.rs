//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod scope;


use crate::schema::ShellConfig;
use rxshell_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scope::validate_app(&mut errors, config);
    misc::validate_progress(&mut errors, config);
    misc::validate_recovery(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_network(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
