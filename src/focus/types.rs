// Focus types shared by the coordinator and platform backends

use serde::{Deserialize, Serialize};

/// Information about the currently active window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveWindowInfo {
    /// Opaque platform window handle
    pub handle: u64,
    pub app_name: String,
    pub window_title: Option<String>,
}

/// States of one focus transition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FocusState {
    Idle,
    CaptureOriginal,
    EnsureRunning,
    SwitchFocus,
    Settle,
    Completed,
    Failed,
}

/// How to wait after launching an application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LaunchWait {
    /// Sleep for the settle delay
    Fixed,
    /// Poll until the process shows up (bounded by the launch timeout),
    /// then sleep for the settle delay
    Poll,
}

/// Errors that end a focus transition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FocusError {
    #[error("No target application given")]
    MissingTarget,
    #[error("Failed to launch {app}: {reason}")]
    LaunchFailed { app: String, reason: String },
    #[error("{app} did not start within {timeout_ms} ms")]
    LaunchTimeout { app: String, timeout_ms: u64 },
    #[error("Could not bring {app} to the front after {attempts} attempts")]
    NotFocused { app: String, attempts: u32 },
}

/// Error reported by a platform backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PlatformError(pub String);

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
