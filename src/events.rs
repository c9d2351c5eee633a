// Command events for observers of the dispatch pipeline
// Defines event payloads and emission trait for testability

use serde::Serialize;

/// Command-related event names
pub mod command_events {
    pub const COMMAND_MATCHED: &str = "command_matched";
    pub const COMMAND_EXECUTED: &str = "command_executed";
    pub const COMMAND_FAILED: &str = "command_failed";
    pub const COMMAND_COMPLETED: &str = "command_completed";
}

/// Payload for command_matched event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandMatchedPayload {
    /// Id shared by every event of one invocation
    pub invocation_id: String,
    /// The text that was matched
    pub text: String,
    /// ID of the matched command
    pub command_id: String,
    /// Resolver stage that produced the command
    pub stage: String,
    /// Trigger, rule or resolver that matched
    pub matched_by: String,
    /// Match confidence (0.0 - 1.0)
    pub confidence: f64,
}

/// Payload for command_executed event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandExecutedPayload {
    pub invocation_id: String,
    pub command_id: String,
    /// Result message
    pub message: String,
}

/// Payload for command_failed event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandFailedPayload {
    pub invocation_id: String,
    /// ID of the command that failed, if one was resolved
    pub command_id: Option<String>,
    /// Error code
    pub error_code: String,
    /// Error message
    pub error_message: String,
}

/// Payload for command_completed event, sent once per invocation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandCompletedPayload {
    pub invocation_id: String,
    pub success: bool,
    pub message: String,
    pub duration_ms: u64,
    /// ISO 8601 timestamp when the invocation finished
    pub timestamp: String,
}

/// Trait for emitting command events
/// Allows mocking in tests while logging in the binary
pub trait CommandEventEmitter: Send + Sync {
    /// Emit command_matched event
    fn emit_command_matched(&self, payload: CommandMatchedPayload);

    /// Emit command_executed event
    fn emit_command_executed(&self, payload: CommandExecutedPayload);

    /// Emit command_failed event
    fn emit_command_failed(&self, payload: CommandFailedPayload);

    /// Emit command_completed event
    fn emit_command_completed(&self, payload: CommandCompletedPayload);
}

/// Emitter that writes every event to the log as JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventEmitter;

impl LoggingEventEmitter {
    fn log<T: Serialize>(name: &str, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => crate::info!("[Events] {} {}", name, json),
            Err(e) => crate::warn!("[Events] Failed to serialize {} payload: {}", name, e),
        }
    }
}

impl CommandEventEmitter for LoggingEventEmitter {
    fn emit_command_matched(&self, payload: CommandMatchedPayload) {
        Self::log(command_events::COMMAND_MATCHED, &payload);
    }

    fn emit_command_executed(&self, payload: CommandExecutedPayload) {
        Self::log(command_events::COMMAND_EXECUTED, &payload);
    }

    fn emit_command_failed(&self, payload: CommandFailedPayload) {
        Self::log(command_events::COMMAND_FAILED, &payload);
    }

    fn emit_command_completed(&self, payload: CommandCompletedPayload) {
        Self::log(command_events::COMMAND_COMPLETED, &payload);
    }
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
