mod app_state;
mod cli;
mod settings;

use std::path::Path;

use rxshell_common::ConfigError;
use rxshell_config::schema::LogLevel;
use rxshell_config::ShellConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const FALLBACK_DIRECTIVE: &str = "rxshell=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = rxshell_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- rxshell crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-----------------------\n");

        default_hook(info);
    }));
}

/// `--log-level` wins, then `RUST_LOG`, then the config file's level.
fn log_directive(cli: Option<&str>, env: Option<&str>, level: LogLevel) -> String {
    match (cli, env) {
        (Some(cli), _) => cli.to_string(),
        (None, Some(env)) if !env.trim().is_empty() => env.to_string(),
        _ => format!("rxshell={}", level.as_directive()),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Out-of-range values are warned about by the loader and clamped later by
/// `settings::shell_settings`; only unreadable files fall back to defaults.
fn load_config(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    match path {
        Some(path) => rxshell_config::toml_loader::load_from_path(path),
        None => rxshell_config::toml_loader::load_default(),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Loaded before logging so the config's level can apply.
    let loaded = load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    let env = std::env::var("RUST_LOG").ok();
    init_logging(&log_directive(args.log_level.as_deref(), env.as_deref(), level));

    tracing::info!("rxshell v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShellConfig::default()
    });
    tracing::info!(home = %config.app.home_url, "Config loaded");

    if let Err(e) = rxshell_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::ShellApp::new(
        config,
        args.launch_action().map(str::to_string),
        args.launch_uri().map(str::to_string),
    );

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
