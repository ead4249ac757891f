//! Validation for the smaller sections: progress, recovery, window, network.

use crate::schema::ShellConfig;

use super::helpers::validate_range;

pub(crate) fn validate_progress(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(
        errors,
        "progress.completion_threshold",
        config.progress.completion_threshold,
        1,
        100,
    );
}

pub(crate) fn validate_recovery(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(
        errors,
        "recovery.back_delay_ms",
        config.recovery.back_delay_ms,
        0,
        2000,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 16384);
    validate_range(errors, "window.height", config.window.height, 240, 16384);
}

/// An override flag with an empty agent string would blank the header.
pub(crate) fn validate_network(errors: &mut Vec<String>, config: &ShellConfig) {
    let net = &config.network;
    if net.override_user_agent && net.user_agent.trim().is_empty() {
        errors.push("network.user_agent must be set when override_user_agent is true".into());
    }
    if net.postfix_user_agent && net.user_agent_postfix.trim().is_empty() {
        errors.push("network.user_agent_postfix must be set when postfix_user_agent is true".into());
    }
}
