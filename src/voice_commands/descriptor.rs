// Command descriptors - static records describing one recognizable command

use serde::{Deserialize, Serialize};

/// Default settle time after a focus transition
pub const DEFAULT_POST_FOCUS_DELAY_MS: u64 = 300;

/// Settle time used by the built-in application-specific commands
pub const SPECIFIC_APP_POST_FOCUS_DELAY_MS: u64 = 500;

/// Which target a command must operate against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FocusStrategy {
    /// Whole desktop, no focus change needed
    SystemWide,
    /// Whatever window is currently active
    ActiveWindow,
    /// One named application, focused before acting
    SpecificApplication,
}

/// What a command does once focus is established
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ActionSpec {
    /// Symbolic key combination, e.g. "Ctrl+S"
    KeyMacro(String),
    /// Token resolved by the custom action capability
    Custom(String),
}

impl ActionSpec {
    /// The macro string or custom token
    pub fn value(&self) -> &str {
        match self {
            ActionSpec::KeyMacro(m) => m,
            ActionSpec::Custom(t) => t,
        }
    }
}

/// Errors raised while constructing or validating a descriptor
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    #[error("Descriptor '{id}' failed validation: {reason}")]
    ValidationFailed { id: String, reason: String },
}

fn default_true() -> bool {
    true
}

fn default_post_focus_delay() -> u64 {
    DEFAULT_POST_FOCUS_DELAY_MS
}

/// A command descriptor as stored in the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Unique key
    pub id: String,
    /// Human-readable label
    pub display_name: String,
    /// Optional longer description
    #[serde(default)]
    pub description: String,
    /// Trigger phrases, matched case-insensitively
    pub triggers: Vec<String>,
    pub focus_strategy: FocusStrategy,
    /// Required for `FocusStrategy::SpecificApplication`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_application: Option<String>,
    pub action: ActionSpec,
    /// Macro tried once when the primary macro fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_macro: Option<String>,
    /// Minimum settle time after focusing, before the action fires
    #[serde(default = "default_post_focus_delay")]
    pub post_focus_delay_ms: u64,
    /// Restore the originally focused window after an app-specific action
    #[serde(default = "default_true")]
    pub return_focus_after: bool,
}

impl CommandDescriptor {
    /// Create a system-wide keystroke command
    pub fn system_wide(id: &str, display_name: &str, triggers: &[&str], key_macro: &str) -> Self {
        Self::build(id, display_name, triggers, FocusStrategy::SystemWide, None, ActionSpec::KeyMacro(key_macro.to_string()))
    }

    /// Create a keystroke command that acts on the active window
    pub fn active_window(id: &str, display_name: &str, triggers: &[&str], key_macro: &str) -> Self {
        Self::build(id, display_name, triggers, FocusStrategy::ActiveWindow, None, ActionSpec::KeyMacro(key_macro.to_string()))
    }

    /// Create a keystroke command that targets one application
    ///
    /// Validation of `target` happens in [`CommandDescriptor::validate`],
    /// which the registry runs on every registration.
    pub fn specific_application(
        id: &str,
        display_name: &str,
        triggers: &[&str],
        target: &str,
        key_macro: &str,
    ) -> Self {
        Self::build(
            id,
            display_name,
            triggers,
            FocusStrategy::SpecificApplication,
            Some(target.to_string()),
            ActionSpec::KeyMacro(key_macro.to_string()),
        )
        .with_post_focus_delay(SPECIFIC_APP_POST_FOCUS_DELAY_MS)
    }

    /// Create a system-wide command handled by the custom action capability
    pub fn custom(id: &str, display_name: &str, triggers: &[&str], token: &str) -> Self {
        Self::build(id, display_name, triggers, FocusStrategy::SystemWide, None, ActionSpec::Custom(token.to_string()))
    }

    fn build(
        id: &str,
        display_name: &str,
        triggers: &[&str],
        focus_strategy: FocusStrategy,
        target_application: Option<String>,
        action: ActionSpec,
    ) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: String::new(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            focus_strategy,
            target_application,
            action,
            alternative_macro: None,
            post_focus_delay_ms: DEFAULT_POST_FOCUS_DELAY_MS,
            return_focus_after: true,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_alternative_macro(mut self, key_macro: &str) -> Self {
        self.alternative_macro = Some(key_macro.to_string());
        self
    }

    pub fn with_post_focus_delay(mut self, delay_ms: u64) -> Self {
        self.post_focus_delay_ms = delay_ms;
        self
    }

    pub fn with_return_focus(mut self, return_focus: bool) -> Self {
        self.return_focus_after = return_focus;
        self
    }

    /// Target application name, or empty when the descriptor has none
    pub fn target(&self) -> &str {
        self.target_application.as_deref().unwrap_or("")
    }

    /// Check structural invariants
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let fail = |reason: &str| DescriptorError::ValidationFailed {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(fail("id cannot be empty"));
        }
        if self.triggers.iter().all(|t| t.trim().is_empty()) {
            return Err(fail("at least one non-empty trigger is required"));
        }
        if self.focus_strategy == FocusStrategy::SpecificApplication
            && self.target().trim().is_empty()
        {
            return Err(fail("specific-application commands need a target application"));
        }
        if self.action.value().trim().is_empty() {
            return Err(fail("action cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;
