// Command executor - establishes focus, then runs a command's action

use crate::focus::{FocusCoordinator, FocusError, FocusTransition};
use crate::voice_commands::actions::{
    ActionError, ActionErrorCode, ActionResult, ApplicationCapability, CustomActionCapability,
    KeyMacroCapability,
};
use crate::voice_commands::command::ExecutableCommand;
use crate::voice_commands::descriptor::{ActionSpec, CommandDescriptor, FocusStrategy};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Why a command did not run to completion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutionError {
    /// Focus could not be established; the action was skipped
    #[error("Focus transition failed: {0}")]
    Focus(FocusError),
    #[error("Action failed: {0}")]
    Action(ActionError),
}

/// What happened while executing one command
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub outcome: Result<ActionResult, ExecutionError>,
    pub transition: FocusTransition,
    /// The primary macro failed and the alternative one succeeded
    pub used_alternative: bool,
    /// The window focused before the command was put back
    pub restored_focus: bool,
    pub elapsed: Duration,
}

impl ExecutionReport {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs resolved commands.
///
/// Every action call is spawned on its own task so a panicking capability
/// surfaces as a `TASK_PANIC` error instead of unwinding into the caller.
pub struct CommandExecutor {
    focus: FocusCoordinator,
    key_macros: Arc<dyn KeyMacroCapability>,
    custom_actions: Arc<dyn CustomActionCapability>,
    applications: Arc<dyn ApplicationCapability>,
    last_executed: Mutex<Option<ExecutableCommand>>,
}

impl CommandExecutor {
    pub fn new(
        focus: FocusCoordinator,
        key_macros: Arc<dyn KeyMacroCapability>,
        custom_actions: Arc<dyn CustomActionCapability>,
        applications: Arc<dyn ApplicationCapability>,
    ) -> Self {
        Self {
            focus,
            key_macros,
            custom_actions,
            applications,
            last_executed: Mutex::new(None),
        }
    }

    pub fn focus(&self) -> &FocusCoordinator {
        &self.focus
    }

    /// Most recently executed command, for replay
    pub fn last_executed(&self) -> Option<ExecutableCommand> {
        self.last_executed.lock().clone()
    }

    /// Establish focus for `command`, then run its action.
    ///
    /// The action is skipped when focus cannot be established.
    pub async fn execute(&self, command: &ExecutableCommand) -> ExecutionReport {
        let started = Instant::now();
        let descriptor = command.descriptor();
        let strategy = command.focus_strategy();
        let post_delay = descriptor
            .map(|d| Duration::from_millis(d.post_focus_delay_ms))
            .unwrap_or(Duration::ZERO);
        let target = descriptor.and_then(|d| d.target_application.as_deref());

        let transition = self.focus.prepare(strategy, target, post_delay).await;
        if let Some(error) = transition.error.clone() {
            crate::warn!("[Executor] Skipping '{}': {}", command.text(), error);
            return ExecutionReport {
                outcome: Err(ExecutionError::Focus(error)),
                transition,
                used_alternative: false,
                restored_focus: false,
                elapsed: started.elapsed(),
            };
        }

        let action_outcome = self.run_action(command).await;

        let mut restored_focus = false;
        if strategy == FocusStrategy::SpecificApplication
            && descriptor.map(|d| d.return_focus_after).unwrap_or(false)
        {
            if let Some(original) = &transition.original {
                restored_focus = self.focus.restore_original(original).await;
            }
        }

        let elapsed = started.elapsed();
        let (outcome, used_alternative) = match action_outcome {
            Ok((result, used_alternative)) => {
                *self.last_executed.lock() = Some(command.clone());
                crate::info!(
                    "[Executor] '{}' executed in {} ms: {}",
                    command.label(),
                    elapsed.as_millis(),
                    result.message
                );
                (Ok(result), used_alternative)
            }
            Err(error) => {
                crate::error!("[Executor] '{}' failed: {}", command.text(), error);
                (Err(ExecutionError::Action(error)), false)
            }
        };

        ExecutionReport {
            outcome,
            transition,
            used_alternative,
            restored_focus,
            elapsed,
        }
    }

    async fn run_action(
        &self,
        command: &ExecutableCommand,
    ) -> Result<(ActionResult, bool), ActionError> {
        match command {
            ExecutableCommand::SystemWide { text, descriptor }
            | ExecutableCommand::ActiveWindow { text, descriptor }
            | ExecutableCommand::SpecificApplication { text, descriptor } => {
                self.run_descriptor_action(text, descriptor).await
            }
            ExecutableCommand::OpenApplication { app, .. } => {
                let apps = self.applications.clone();
                let app = app.clone();
                guarded(async move { apps.open(&app).await }).await.map(|r| (r, false))
            }
            ExecutableCommand::CloseApplication { app, .. } => {
                let apps = self.applications.clone();
                let app = app.clone();
                guarded(async move { apps.close(&app).await }).await.map(|r| (r, false))
            }
            ExecutableCommand::OpenFile { name, folder, .. } => {
                let apps = self.applications.clone();
                let name = name.clone();
                let folder = *folder;
                guarded(async move { apps.open_file(&name, folder).await })
                    .await
                    .map(|r| (r, false))
            }
            ExecutableCommand::Custom {
                text, token, argument, ..
            } => {
                let input = argument.as_deref().unwrap_or(text);
                self.run_custom(token, input).await.map(|r| (r, false))
            }
        }
    }

    async fn run_descriptor_action(
        &self,
        text: &str,
        descriptor: &CommandDescriptor,
    ) -> Result<(ActionResult, bool), ActionError> {
        match &descriptor.action {
            ActionSpec::Custom(token) => self.run_custom(token, text).await.map(|r| (r, false)),
            ActionSpec::KeyMacro(key_macro) => match self.send_macro(key_macro).await {
                Ok(result) => Ok((result, false)),
                Err(primary) => {
                    let Some(alternative) = descriptor.alternative_macro.as_deref() else {
                        return Err(primary);
                    };
                    crate::warn!(
                        "[Executor] Macro {} failed ({}), trying alternative {}",
                        key_macro,
                        primary,
                        alternative
                    );
                    self.send_macro(alternative).await.map(|r| (r, true))
                }
            },
        }
    }

    async fn send_macro(&self, key_macro: &str) -> Result<ActionResult, ActionError> {
        let keys = self.key_macros.clone();
        let key_macro = key_macro.to_string();
        guarded(async move { keys.send_macro(&key_macro).await }).await
    }

    async fn run_custom(&self, token: &str, text: &str) -> Result<ActionResult, ActionError> {
        let custom = self.custom_actions.clone();
        let token = token.to_string();
        let text = text.to_string();
        guarded(async move { custom.run(&token, &text).await }).await
    }
}

/// Run an action future on its own task, mapping a panic to `TASK_PANIC`
async fn guarded<F>(action: F) -> Result<ActionResult, ActionError>
where
    F: Future<Output = Result<ActionResult, ActionError>> + Send + 'static,
{
    tokio::spawn(action).await.map_err(|e| {
        ActionError::new(
            ActionErrorCode::TaskPanic,
            format!("Action task panicked: {}", e),
        )
    })?
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
