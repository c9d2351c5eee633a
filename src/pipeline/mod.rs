// Dispatch pipeline - raw command text in, executed command and outcome out
//
// Per invocation:
//   screen input -> intent rewrite -> fast-path resolvers -> resolver chain
//   -> focus + action -> completion event -> outcome report to the detector

pub mod security;

use crate::config::{ConfigError, PipelineConfig};
use crate::events::{
    current_timestamp, CommandCompletedPayload, CommandEventEmitter, CommandExecutedPayload,
    CommandFailedPayload, CommandMatchedPayload, LoggingEventEmitter,
};
use crate::focus::{ActiveWindowInfo, DryRunPlatform, FocusCoordinator, FocusError};
use crate::intent::IntentDetector;
use crate::voice_commands::actions::{ActionError, DryRunActions};
use crate::voice_commands::command::ExecutableCommand;
use crate::voice_commands::dedup::DuplicateSuppressor;
use crate::voice_commands::descriptor::CommandDescriptor;
use crate::voice_commands::executor::{CommandExecutor, ExecutionError};
use crate::voice_commands::matcher::{normalize, MatcherConfig, TriggerMatcher};
use crate::voice_commands::registry::{CommandRegistry, LoadSource, RegistryError};
use crate::voice_commands::resolver::domain::DomainResolver;
use crate::voice_commands::resolver::{
    resolve_with_domains, ChainConfig, ChainOutcome, Resolution, ResolutionStage, ResolverChain,
};
use parking_lot::{Mutex, RwLock};
use security::{InputScreen, RejectReason};
use serde::Serialize;
use std::sync::Arc;
use tokio::time::Instant;
use uuid::Uuid;

/// Failure taxonomy of one invocation.
///
/// Only `NoMatchFound`, `Suppressed`, `InputRejected`,
/// `FocusTransitionFailed` and `ActionExecutionFailed` reach the caller;
/// the rest are recovered and logged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("No command matched '{0}'")]
    NoMatchFound(String),
    #[error("Command rejected at registration: {0}")]
    ValidationFailed(String),
    #[error("Focus transition failed: {0}")]
    FocusTransitionFailed(FocusError),
    #[error("Action failed: {0}")]
    ActionExecutionFailed(ActionError),
    #[error("Command store corrupted: {0}")]
    PersistenceCorrupted(String),
    #[error("{collaborator} unavailable: {reason}")]
    CollaboratorUnavailable { collaborator: String, reason: String },
    #[error("Input rejected: {0}")]
    InputRejected(RejectReason),
    #[error("Duplicate of the previous command ignored")]
    Suppressed,
}

impl DispatchError {
    /// Stable code for events
    pub fn code(&self) -> &'static str {
        match self {
            DispatchError::NoMatchFound(_) => "NO_MATCH_FOUND",
            DispatchError::ValidationFailed(_) => "VALIDATION_FAILED",
            DispatchError::FocusTransitionFailed(_) => "FOCUS_TRANSITION_FAILED",
            DispatchError::ActionExecutionFailed(_) => "ACTION_EXECUTION_FAILED",
            DispatchError::PersistenceCorrupted(_) => "PERSISTENCE_CORRUPTED",
            DispatchError::CollaboratorUnavailable { .. } => "COLLABORATOR_UNAVAILABLE",
            DispatchError::InputRejected(_) => "INPUT_REJECTED",
            DispatchError::Suppressed => "SUPPRESSED",
        }
    }

    /// Short message for the caller, never an error chain
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::NoMatchFound(text) => format!("No command found for '{}'", text),
            DispatchError::FocusTransitionFailed(FocusError::MissingTarget) => {
                "Command has no target application".to_string()
            }
            DispatchError::FocusTransitionFailed(
                FocusError::LaunchFailed { app, .. }
                | FocusError::LaunchTimeout { app, .. }
                | FocusError::NotFocused { app, .. },
            ) => format!("Could not switch to {}", app),
            DispatchError::ActionExecutionFailed(_) => "Command could not be performed".to_string(),
            DispatchError::InputRejected(_) => "Command text was rejected".to_string(),
            DispatchError::Suppressed => "Repeated command ignored".to_string(),
            DispatchError::ValidationFailed(_)
            | DispatchError::PersistenceCorrupted(_)
            | DispatchError::CollaboratorUnavailable { .. } => "Command could not be processed".to_string(),
        }
    }
}

impl From<ExecutionError> for DispatchError {
    fn from(error: ExecutionError) -> Self {
        match error {
            ExecutionError::Focus(e) => DispatchError::FocusTransitionFailed(e),
            ExecutionError::Action(e) => DispatchError::ActionExecutionFailed(e),
        }
    }
}

impl From<RegistryError> for DispatchError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::Validation(e) => DispatchError::ValidationFailed(e.to_string()),
            RegistryError::PersistenceError(e) | RegistryError::LoadError(e) => {
                DispatchError::PersistenceCorrupted(e)
            }
        }
    }
}

/// What the caller gets back for one invocation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub success: bool,
    pub message: String,
    pub duration_ms: u64,
    /// Command that ran or was attempted
    pub command_id: Option<String>,
}

/// Single-slot state shared by consecutive invocations
#[derive(Debug)]
struct DispatchState {
    gate: DuplicateSuppressor,
    last_original_window: Option<ActiveWindowInfo>,
}

/// The dispatch pipeline.
///
/// Construct once at start-up and share it; the registry, dedup gate and
/// last-window slot live here instead of in globals.
pub struct DispatchPipeline {
    registry: Arc<RwLock<CommandRegistry>>,
    chain: ResolverChain,
    fast_path: Vec<Arc<dyn DomainResolver>>,
    state: Mutex<DispatchState>,
    executor: CommandExecutor,
    emitter: Arc<dyn CommandEventEmitter>,
    intent: Option<Arc<dyn IntentDetector>>,
    screen: InputScreen,
}

impl DispatchPipeline {
    pub fn new(registry: CommandRegistry, executor: CommandExecutor) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            chain: ResolverChain::default(),
            fast_path: Vec::new(),
            state: Mutex::new(DispatchState {
                gate: DuplicateSuppressor::default(),
                last_original_window: None,
            }),
            executor,
            emitter: Arc::new(LoggingEventEmitter),
            intent: None,
            screen: InputScreen::default(),
        }
    }

    /// Pipeline on the dry-run platform and actions, configured from `config`
    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = CommandRegistry::new(config.commands_path.clone());
        if registry.load() == LoadSource::SeededCorrupt {
            let error = DispatchError::PersistenceCorrupted(config.commands_path.display().to_string());
            crate::warn!("[Pipeline] {}; continuing with default commands", error);
        }

        let actions = Arc::new(DryRunActions::new());
        let focus = FocusCoordinator::new(Arc::new(DryRunPlatform::new()))
            .with_config(config.focus_config());
        let executor = CommandExecutor::new(focus, actions.clone(), actions.clone(), actions);

        let chain = ResolverChain::new(TriggerMatcher::with_config(MatcherConfig {
            fuzzy_threshold: config.fuzzy_threshold,
        }))
        .with_config(ChainConfig {
            fuzzy_enabled: config.fuzzy_enabled,
            legacy_enabled: true,
        });

        Ok(Self::new(registry, executor)
            .with_chain(chain)
            .with_gate(DuplicateSuppressor::new(
                config.dedup_window(),
                config.exemptions.clone(),
            ))
            .with_screen(InputScreen::new(config.max_input_chars)))
    }

    pub fn with_chain(mut self, chain: ResolverChain) -> Self {
        self.chain = chain;
        self
    }

    /// Append a resolver tried before the chain
    pub fn with_fast_path_resolver(mut self, resolver: Arc<dyn DomainResolver>) -> Self {
        self.fast_path.push(resolver);
        self
    }

    pub fn with_gate(mut self, gate: DuplicateSuppressor) -> Self {
        self.state.get_mut().gate = gate;
        self
    }

    pub fn with_emitter(mut self, emitter: Arc<dyn CommandEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn with_intent_detector(mut self, detector: Arc<dyn IntentDetector>) -> Self {
        self.intent = Some(detector);
        self
    }

    pub fn with_screen(mut self, screen: InputScreen) -> Self {
        self.screen = screen;
        self
    }

    /// Shared handle to the registry
    pub fn registry(&self) -> Arc<RwLock<CommandRegistry>> {
        self.registry.clone()
    }

    /// Register (or replace) a command
    pub fn register_command(&self, descriptor: CommandDescriptor) -> Result<(), DispatchError> {
        self.registry.write().register(descriptor).map_err(|e| {
            crate::warn!("[Pipeline] Registration rejected: {}", e);
            DispatchError::from(e)
        })
    }

    /// Window that was focused before the most recent focus transition
    pub fn last_original_window(&self) -> Option<ActiveWindowInfo> {
        self.state.lock().last_original_window.clone()
    }

    /// Most recently executed command
    pub fn last_executed(&self) -> Option<ExecutableCommand> {
        self.executor.last_executed()
    }

    /// Run one command text through the pipeline.
    ///
    /// Never fails: every error becomes an unsuccessful outcome.
    pub async fn dispatch(&self, raw_text: &str) -> DispatchOutcome {
        let started = Instant::now();
        let invocation_id = Uuid::new_v4().to_string();

        let (result, command_id) = self.run(&invocation_id, raw_text).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        let (success, message) = match &result {
            Ok(message) => (true, message.clone()),
            Err(error) => {
                crate::warn!("[Pipeline] '{}' not executed: {}", raw_text, error);
                self.emitter.emit_command_failed(CommandFailedPayload {
                    invocation_id: invocation_id.clone(),
                    command_id: command_id.clone(),
                    error_code: error.code().to_string(),
                    error_message: error.to_string(),
                });
                (false, error.user_message())
            }
        };

        self.emitter.emit_command_completed(CommandCompletedPayload {
            invocation_id,
            success,
            message: message.clone(),
            duration_ms,
            timestamp: current_timestamp(),
        });

        if !matches!(
            result,
            Err(DispatchError::InputRejected(_)) | Err(DispatchError::Suppressed)
        ) {
            self.report_outcome(raw_text, success);
        }

        DispatchOutcome {
            success,
            message,
            duration_ms,
            command_id,
        }
    }

    async fn run(
        &self,
        invocation_id: &str,
        raw_text: &str,
    ) -> (Result<String, DispatchError>, Option<String>) {
        if let Err(reason) = self.screen.check(raw_text) {
            return (Err(DispatchError::InputRejected(reason)), None);
        }

        let text = self.detect_intent(raw_text).await;
        if text != raw_text {
            if let Err(reason) = self.screen.check(&text) {
                return (Err(DispatchError::InputRejected(reason)), None);
            }
        }

        let resolution = match self.resolve(&text) {
            Ok(resolution) => resolution,
            Err(error) => return (Err(error), None),
        };
        let command_id = resolution.command.command_id();

        self.emitter.emit_command_matched(CommandMatchedPayload {
            invocation_id: invocation_id.to_string(),
            text: text.clone(),
            command_id: command_id.clone(),
            stage: stage_name(resolution.stage).to_string(),
            matched_by: resolution.matched_by.clone(),
            confidence: resolution.confidence,
        });

        let report = self.executor.execute(&resolution.command).await;
        if let Some(original) = report.transition.original.clone() {
            self.state.lock().last_original_window = Some(original);
        }

        match report.outcome {
            Ok(result) => {
                self.emitter.emit_command_executed(CommandExecutedPayload {
                    invocation_id: invocation_id.to_string(),
                    command_id: command_id.clone(),
                    message: result.message,
                });
                (Ok(resolution.command.label()), Some(command_id))
            }
            Err(error) => (Err(error.into()), Some(command_id)),
        }
    }

    /// Fast-path resolvers first, then the chain
    fn resolve(&self, text: &str) -> Result<Resolution, DispatchError> {
        if let Some((name, command)) = resolve_with_domains(&self.fast_path, text) {
            crate::info!("[Pipeline] '{}' taken by fast-path resolver {}", text, name);
            return Ok(Resolution {
                command,
                stage: ResolutionStage::Domain,
                confidence: 1.0,
                matched_by: name,
            });
        }

        let outcome = {
            let registry = self.registry.read();
            let mut state = self.state.lock();
            self.chain.resolve(text, &registry, &mut state.gate)
        };

        match outcome {
            ChainOutcome::Resolved(resolution) => Ok(resolution),
            ChainOutcome::Suppressed => Err(DispatchError::Suppressed),
            ChainOutcome::NoMatch => Err(DispatchError::NoMatchFound(text.trim().to_string())),
        }
    }

    /// Text to resolve: the detector's rewrite when it has one, else `raw_text`.
    ///
    /// The detector sees normalized text; outcomes are still reported
    /// against the raw text.
    async fn detect_intent(&self, raw_text: &str) -> String {
        let Some(detector) = self.intent.clone() else {
            return raw_text.to_string();
        };

        let normalized = normalize(raw_text);
        let text = normalized.clone();
        let detection = tokio::spawn(async move { detector.detect_intent(&text).await }).await;
        let failure = match detection {
            Ok(Ok(result)) => {
                let effective = result.effective_text(&normalized);
                if effective == normalized {
                    return raw_text.to_string();
                }
                crate::debug!(
                    "[Pipeline] Intent detector rewrote '{}' to '{}'",
                    raw_text,
                    effective
                );
                return effective.to_string();
            }
            Ok(Err(e)) => e.to_string(),
            Err(e) => format!("detector task panicked: {}", e),
        };

        let error = DispatchError::CollaboratorUnavailable {
            collaborator: "intent detector".to_string(),
            reason: failure,
        };
        crate::warn!("[Pipeline] {}; using original text", error);
        raw_text.to_string()
    }

    /// Fire-and-forget outcome report; failures are only logged
    fn report_outcome(&self, raw_text: &str, success: bool) {
        let Some(detector) = self.intent.clone() else {
            return;
        };
        let text = raw_text.to_string();
        tokio::spawn(async move {
            if let Err(e) = detector.record_outcome(&text, success).await {
                crate::warn!("[Pipeline] Failed to record outcome for '{}': {}", text, e);
            }
        });
    }
}

fn stage_name(stage: ResolutionStage) -> &'static str {
    match stage {
        ResolutionStage::LiteralPattern => "literal_pattern",
        ResolutionStage::Domain => "domain",
        ResolutionStage::Registry => "registry",
        ResolutionStage::Fuzzy => "fuzzy",
        ResolutionStage::Legacy => "legacy",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
