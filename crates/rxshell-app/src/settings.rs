//! Config -> controller settings.

use std::time::Duration;

use rxshell_common::ShellError;
use rxshell_config::schema::{ErrorContractSetting, NetworkConfig};
use rxshell_config::ShellConfig;
use rxshell_core::{ErrorContract, HostedAppScope, ShellSettings};
use tracing::debug;

/// The wry adapter reports failed sub-resources through its init script.
pub const MODERN_ERRORS_SUPPORTED: bool = true;

pub fn shell_settings(config: &ShellConfig) -> Result<ShellSettings, ShellError> {
    let scope = HostedAppScope::new(&config.app.home_url, &config.app.host_marker)?;
    let mut settings = ShellSettings::new(scope);
    settings.completion_threshold = config.progress.completion_threshold.clamp(1, 100) as u8;
    settings.back_delay = Duration::from_millis(u64::from(config.recovery.back_delay_ms.min(2000)));
    settings.error_contract = ErrorContract::select(
        preferred_contract(config.network.error_contract),
        MODERN_ERRORS_SUPPORTED,
    );
    Ok(settings)
}

pub fn preferred_contract(setting: ErrorContractSetting) -> Option<ErrorContract> {
    match setting {
        ErrorContractSetting::Auto => None,
        ErrorContractSetting::Legacy => Some(ErrorContract::Legacy),
        ErrorContractSetting::Modern => Some(ErrorContract::Modern),
    }
}

/// A postfix on the engine's own agent needs that agent read first.
pub fn needs_engine_agent(net: &NetworkConfig) -> bool {
    net.postfix_user_agent && !net.override_user_agent
}

/// User agent for the content view. Without an override or a known engine
/// default, a bare postfix would replace the whole agent, so the engine
/// default is kept instead.
pub fn content_user_agent(net: &NetworkConfig, engine_default: Option<&str>) -> Option<String> {
    if !net.override_user_agent && engine_default.is_none() {
        if net.postfix_user_agent {
            debug!("engine user agent unknown, postfix not applied");
        }
        return None;
    }
    net.user_agent(engine_default)
}
