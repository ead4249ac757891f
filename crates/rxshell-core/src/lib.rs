//! Hybrid shell controller.
//!
//! Decides, for every event coming out of the embedded browser surface,
//! whether to load in place, hand off to the OS, or drive the loading and
//! offline UI. Platform specifics stay behind the traits in [`surface`]
//! and [`connectivity`].

pub mod cache_policy;
pub mod connectivity;
pub mod controller;
pub mod deep_link;
pub mod deferred;
pub mod error_recovery;
pub mod events;
pub mod popup;
pub mod progress;
pub mod scope;
pub mod surface;

pub use cache_policy::CachePolicyController;
pub use connectivity::ConnectivityProbe;
pub use controller::{ShellController, ShellSettings};
pub use deep_link::{DeepLinkResolver, LaunchRequest};
pub use error_recovery::{ErrorContract, ErrorOutcome, ErrorRecoveryHandler};
pub use events::ShellEvent;
pub use popup::PopupOutcome;
pub use progress::{LoadProgress, LoadState, ProgressTransition};
pub use scope::{HostedAppScope, NavigationDecision};
pub use surface::{BrowserSurface, ExternalDispatcher, ShellUi};
