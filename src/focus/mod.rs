// Focus management - brings the right window forward before an action runs

pub mod coordinator;
pub mod platform;
pub mod types;

pub use coordinator::{FocusConfig, FocusCoordinator, FocusTransition};
pub use platform::{DryRunPlatform, WindowPlatform};
pub use types::{ActiveWindowInfo, FocusError, FocusState, LaunchWait, PlatformError};
