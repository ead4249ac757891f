pub mod errors;
pub mod types;

pub use errors::{ConfigError, DeepLinkError, PlatformError, ShellError, SurfaceError};
pub use types::{CacheMode, LaunchAction, LoadErrorCode};

pub type Result<T> = std::result::Result<T, ShellError>;
