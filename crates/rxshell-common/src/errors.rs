use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("connectivity query failed: {0}")]
    ConnectivityError(String),

    #[error("external dispatch failed: {0}")]
    DispatchError(String),
}

/// Failures reported by the embedded browser surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("browser surface error: {0}")]
    Backend(String),
}

/// A launch request that could not be inspected.
#[derive(Debug, thiserror::Error)]
pub enum DeepLinkError {
    #[error("malformed launch uri: {0}")]
    MalformedUri(String),

    #[error("unknown launch action: {0}")]
    UnknownAction(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    DeepLink(#[from] DeepLinkError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid app scope: {0}")]
    Scope(String),

    #[error("{0}")]
    Other(String),
}
