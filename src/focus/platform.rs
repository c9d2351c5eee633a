// Window platform boundary - process and window primitives used for focus

use super::types::{ActiveWindowInfo, PlatformError};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Process and window primitives.
///
/// Implementations wrap the OS; the coordinator only sequences these calls.
#[async_trait]
pub trait WindowPlatform: Send + Sync {
    /// Whether a process for `app` is running
    async fn is_application_running(&self, app: &str) -> bool;

    /// Start `app`; returns once the launch request is issued
    async fn launch(&self, app: &str) -> Result<(), PlatformError>;

    /// Bring `app` to the front directly
    async fn switch_to(&self, app: &str) -> bool;

    /// Currently focused window, if any
    async fn active_window(&self) -> Option<ActiveWindowInfo>;

    /// Title of the currently focused window
    async fn active_window_title(&self) -> Option<String>;

    /// Move focus to the next window in the switcher order
    async fn cycle_window(&self) -> Result<(), PlatformError>;

    /// Re-focus a previously captured window
    async fn restore(&self, window: &ActiveWindowInfo) -> bool;
}

/// Platform that performs no OS calls and logs every request.
///
/// Keeps an in-memory set of "running" applications so repeated commands
/// behave like they would against a real desktop.
#[derive(Default)]
pub struct DryRunPlatform {
    state: Mutex<DryRunState>,
}

#[derive(Default)]
struct DryRunState {
    running: Vec<String>,
    active: Option<ActiveWindowInfo>,
    next_handle: u64,
}

impl DryRunPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn focus_app(state: &mut DryRunState, app: &str) {
        state.next_handle += 1;
        state.active = Some(ActiveWindowInfo {
            handle: state.next_handle,
            app_name: app.to_string(),
            window_title: Some(app.to_string()),
        });
    }
}

#[async_trait]
impl WindowPlatform for DryRunPlatform {
    async fn is_application_running(&self, app: &str) -> bool {
        let key = app.to_lowercase();
        self.state.lock().running.iter().any(|r| *r == key)
    }

    async fn launch(&self, app: &str) -> Result<(), PlatformError> {
        crate::info!("[DryRunPlatform] launch {}", app);
        let mut state = self.state.lock();
        let key = app.to_lowercase();
        if !state.running.contains(&key) {
            state.running.push(key);
        }
        Ok(())
    }

    async fn switch_to(&self, app: &str) -> bool {
        crate::info!("[DryRunPlatform] switch to {}", app);
        let mut state = self.state.lock();
        let key = app.to_lowercase();
        if state.running.contains(&key) {
            Self::focus_app(&mut state, app);
            true
        } else {
            false
        }
    }

    async fn active_window(&self) -> Option<ActiveWindowInfo> {
        self.state.lock().active.clone()
    }

    async fn active_window_title(&self) -> Option<String> {
        self.state.lock().active.as_ref().and_then(|w| w.window_title.clone())
    }

    async fn cycle_window(&self) -> Result<(), PlatformError> {
        crate::info!("[DryRunPlatform] cycle window");
        Ok(())
    }

    async fn restore(&self, window: &ActiveWindowInfo) -> bool {
        crate::info!("[DryRunPlatform] restore {}", window.app_name);
        self.state.lock().active = Some(window.clone());
        true
    }
}

#[cfg(test)]
#[path = "platform_test.rs"]
mod tests;
