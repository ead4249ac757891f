use std::path::PathBuf;

use clap::Parser;

/// rxshell: desktop shell for the Reactive Resume web app.
#[derive(Parser, Debug)]
#[command(name = "rxshell", version, about)]
pub struct Args {
    /// Link to open on launch. Implies `--action view`.
    pub url: Option<String>,

    /// Launch action (view, main).
    #[arg(long)]
    pub action: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `rxshell_core=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn launch_action(&self) -> Option<&str> {
        self.action
            .as_deref()
            .or_else(|| self.url.as_ref().map(|_| "view"))
    }

    pub fn launch_uri(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
