// Focus coordinator - establishes window focus before a command's action runs
//
// One transition per invocation:
//   Idle -> CaptureOriginal -> [EnsureRunning -> SwitchFocus] -> Settle -> Completed
// The bracketed steps only run for SpecificApplication commands. Any step
// that cannot establish focus ends in Failed and the action must be skipped.

use super::platform::WindowPlatform;
use super::types::{ActiveWindowInfo, FocusError, FocusState, LaunchWait};
use crate::voice_commands::descriptor::FocusStrategy;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Delay after launching an application before it is considered ready
pub const DEFAULT_LAUNCH_SETTLE_MS: u64 = 2000;
/// Window switcher attempts before giving up
pub const DEFAULT_WINDOW_CYCLE_ATTEMPTS: u32 = 5;
/// Delay between window switcher attempts
pub const DEFAULT_WINDOW_CYCLE_DELAY_MS: u64 = 500;

/// Timing and retry settings for focus transitions
#[derive(Debug, Clone)]
pub struct FocusConfig {
    pub launch_wait: LaunchWait,
    pub launch_settle: Duration,
    pub poll_interval: Duration,
    pub launch_timeout: Duration,
    pub cycle_attempts: u32,
    pub cycle_delay: Duration,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            launch_wait: LaunchWait::Fixed,
            launch_settle: Duration::from_millis(DEFAULT_LAUNCH_SETTLE_MS),
            poll_interval: Duration::from_millis(250),
            launch_timeout: Duration::from_millis(10_000),
            cycle_attempts: DEFAULT_WINDOW_CYCLE_ATTEMPTS,
            cycle_delay: Duration::from_millis(DEFAULT_WINDOW_CYCLE_DELAY_MS),
        }
    }
}

/// Record of one focus transition
#[derive(Debug, Clone)]
pub struct FocusTransition {
    /// States visited, in order
    pub trace: Vec<FocusState>,
    /// Window that was focused before the transition
    pub original: Option<ActiveWindowInfo>,
    /// Whether the target had to be launched
    pub launched: bool,
    pub elapsed: Duration,
    pub error: Option<FocusError>,
}

impl FocusTransition {
    fn start() -> Self {
        Self {
            trace: vec![FocusState::Idle],
            original: None,
            launched: false,
            elapsed: Duration::ZERO,
            error: None,
        }
    }

    fn enter(&mut self, state: FocusState) {
        self.trace.push(state);
    }

    /// Final state reached
    pub fn state(&self) -> FocusState {
        self.trace.last().copied().unwrap_or(FocusState::Idle)
    }

    pub fn is_completed(&self) -> bool {
        self.state() == FocusState::Completed
    }
}

/// Runs focus transitions against a window platform
pub struct FocusCoordinator {
    platform: Arc<dyn WindowPlatform>,
    config: FocusConfig,
}

impl FocusCoordinator {
    pub fn new(platform: Arc<dyn WindowPlatform>) -> Self {
        Self {
            platform,
            config: FocusConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FocusConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    pub fn platform(&self) -> &Arc<dyn WindowPlatform> {
        &self.platform
    }

    /// Run one transition for `strategy`.
    ///
    /// SystemWide and ActiveWindow always complete. SpecificApplication
    /// completes only once `target` is confirmed in front.
    pub async fn prepare(
        &self,
        strategy: FocusStrategy,
        target: Option<&str>,
        post_focus_delay: Duration,
    ) -> FocusTransition {
        let started = Instant::now();
        let mut transition = FocusTransition::start();

        transition.enter(FocusState::CaptureOriginal);
        transition.original = self.platform.active_window().await;

        if strategy == FocusStrategy::SpecificApplication {
            if let Err(e) = self.focus_application(target, &mut transition).await {
                crate::warn!("[FocusCoordinator] Focus transition failed: {}", e);
                transition.enter(FocusState::Failed);
                transition.error = Some(e);
                transition.elapsed = started.elapsed();
                return transition;
            }
        }

        transition.enter(FocusState::Settle);
        if !post_focus_delay.is_zero() {
            tokio::time::sleep(post_focus_delay).await;
        }

        transition.enter(FocusState::Completed);
        transition.elapsed = started.elapsed();
        crate::debug!(
            "[FocusCoordinator] {:?} focus ready after {:?}",
            strategy,
            transition.elapsed
        );
        transition
    }

    /// Put back the window captured before a transition
    pub async fn restore_original(&self, original: &ActiveWindowInfo) -> bool {
        let restored = self.platform.restore(original).await;
        if !restored {
            crate::warn!(
                "[FocusCoordinator] Could not restore original window '{}'",
                original.app_name
            );
        }
        restored
    }

    async fn focus_application(
        &self,
        target: Option<&str>,
        transition: &mut FocusTransition,
    ) -> Result<(), FocusError> {
        let app = target
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(FocusError::MissingTarget)?;

        transition.enter(FocusState::EnsureRunning);
        if !self.platform.is_application_running(app).await {
            crate::info!("[FocusCoordinator] {} is not running, launching", app);
            self.platform
                .launch(app)
                .await
                .map_err(|e| FocusError::LaunchFailed {
                    app: app.to_string(),
                    reason: e.to_string(),
                })?;
            transition.launched = true;
            self.wait_for_launch(app).await?;
        }

        transition.enter(FocusState::SwitchFocus);
        if self.platform.switch_to(app).await {
            return Ok(());
        }

        crate::debug!("[FocusCoordinator] Direct switch to {} failed, cycling windows", app);
        if self.cycle_until_focused(app).await {
            Ok(())
        } else {
            Err(FocusError::NotFocused {
                app: app.to_string(),
                attempts: self.config.cycle_attempts,
            })
        }
    }

    async fn wait_for_launch(&self, app: &str) -> Result<(), FocusError> {
        if self.config.launch_wait == LaunchWait::Poll {
            let deadline = Instant::now() + self.config.launch_timeout;
            while !self.platform.is_application_running(app).await {
                if Instant::now() >= deadline {
                    return Err(FocusError::LaunchTimeout {
                        app: app.to_string(),
                        timeout_ms: self.config.launch_timeout.as_millis() as u64,
                    });
                }
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }
        tokio::time::sleep(self.config.launch_settle).await;
        Ok(())
    }

    async fn cycle_until_focused(&self, app: &str) -> bool {
        let needle = app.to_lowercase();
        for attempt in 1..=self.config.cycle_attempts {
            if let Err(e) = self.platform.cycle_window().await {
                crate::warn!("[FocusCoordinator] Window cycle failed: {}", e);
                return false;
            }
            tokio::time::sleep(self.config.cycle_delay).await;

            let title = self.platform.active_window_title().await.unwrap_or_default();
            if title.to_lowercase().contains(&needle) {
                crate::debug!(
                    "[FocusCoordinator] Found {} after {} window cycle(s)",
                    app,
                    attempt
                );
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod tests;
