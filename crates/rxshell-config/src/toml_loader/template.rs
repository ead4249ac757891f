//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# rxshell Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
home_url = "https://rxresu.me/"
host_marker = "rxresu.me"

[progress]
# completion_threshold = 100   # 1-100, progress at which the loading overlay lifts

[network]
# override_user_agent = false
# user_agent = ""
# postfix_user_agent = true
# user_agent_postfix = "rxshell/0.1.0"
# mixed_content = false       # no effect: the engine's mixed-content policy applies
# error_contract = "auto"      # auto, legacy, modern

[recovery]
# back_delay_ms = 100          # 0-2000

[window]
# title = "Reactive Resume"
# width = 1280                 # >= 320
# height = 800                 # >= 240
# devtools = false

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
