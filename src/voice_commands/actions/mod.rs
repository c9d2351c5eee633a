// Actions module - capabilities the executor calls to perform a command

pub mod dry_run;
pub mod key_macro;

pub use dry_run::DryRunActions;
pub use key_macro::{parse_macro, KeyCombo, Modifier};

use async_trait::async_trait;
use serde::Serialize;

/// Result of an action execution
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionResult {
    /// Description of what was done
    pub message: String,
    /// Optional additional data
    pub data: Option<serde_json::Value>,
}

impl ActionResult {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// Typed error codes for action execution failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionErrorCode {
    /// Invalid parameter value
    InvalidParameter,
    /// Key macro could not be parsed
    InvalidMacro,
    /// Custom action token has no handler
    UnknownToken,
    /// General execution error
    ExecutionError,
    /// Async task panicked
    TaskPanic,
    /// Failed to open application or file
    OpenFailed,
}

impl std::fmt::Display for ActionErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActionErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ActionErrorCode::InvalidMacro => "INVALID_MACRO",
            ActionErrorCode::UnknownToken => "UNKNOWN_TOKEN",
            ActionErrorCode::ExecutionError => "EXECUTION_ERROR",
            ActionErrorCode::TaskPanic => "TASK_PANIC",
            ActionErrorCode::OpenFailed => "OPEN_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Error during action execution
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionError {
    /// Typed error code for categorization
    pub code: ActionErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ActionError {
    pub fn new(code: ActionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ActionError {}

/// Sends a symbolic key combination such as `Ctrl+Shift+S`
#[async_trait]
pub trait KeyMacroCapability: Send + Sync {
    async fn send_macro(&self, key_macro: &str) -> Result<ActionResult, ActionError>;
}

/// Runs an application-defined action keyed by a token
#[async_trait]
pub trait CustomActionCapability: Send + Sync {
    /// `text` is the command text or the argument a resolver extracted
    async fn run(&self, token: &str, text: &str) -> Result<ActionResult, ActionError>;
}

/// Opens and closes applications and files by name
#[async_trait]
pub trait ApplicationCapability: Send + Sync {
    async fn open(&self, app: &str) -> Result<ActionResult, ActionError>;

    async fn close(&self, app: &str) -> Result<ActionResult, ActionError>;

    async fn open_file(&self, name: &str, folder: bool) -> Result<ActionResult, ActionError>;
}
