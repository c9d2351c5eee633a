// Dry-run actions - validate and log instead of touching the desktop

use super::key_macro::parse_macro;
use super::{
    ActionError, ActionErrorCode, ActionResult, ApplicationCapability, CustomActionCapability,
    KeyMacroCapability,
};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Action backend used when no platform backend is wired in.
///
/// Macros are still parsed so malformed ones fail the same way they would
/// on a real keyboard backend. Every performed action is kept in a journal.
#[derive(Default)]
pub struct DryRunActions {
    journal: Mutex<Vec<String>>,
}

impl DryRunActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions performed so far, oldest first
    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().clone()
    }

    fn record(&self, entry: String) -> ActionResult {
        crate::info!("[DryRunActions] {}", entry);
        self.journal.lock().push(entry.clone());
        ActionResult::message(entry)
    }
}

fn require_name(value: &str, what: &str) -> Result<(), ActionError> {
    if value.trim().is_empty() {
        return Err(ActionError::new(
            ActionErrorCode::InvalidParameter,
            format!("Missing {} name", what),
        ));
    }
    Ok(())
}

#[async_trait]
impl KeyMacroCapability for DryRunActions {
    async fn send_macro(&self, key_macro: &str) -> Result<ActionResult, ActionError> {
        let combo = parse_macro(key_macro)?;
        let mut result = self.record(format!("Pressed {}", combo));
        result.data = serde_json::to_value(&combo).ok();
        Ok(result)
    }
}

#[async_trait]
impl CustomActionCapability for DryRunActions {
    async fn run(&self, token: &str, text: &str) -> Result<ActionResult, ActionError> {
        if token.trim().is_empty() {
            return Err(ActionError::new(
                ActionErrorCode::UnknownToken,
                "Empty custom action token",
            ));
        }
        Ok(self.record(format!("Ran {} with '{}'", token, text)))
    }
}

#[async_trait]
impl ApplicationCapability for DryRunActions {
    async fn open(&self, app: &str) -> Result<ActionResult, ActionError> {
        require_name(app, "application")?;
        Ok(self.record(format!("Opened {}", app)))
    }

    async fn close(&self, app: &str) -> Result<ActionResult, ActionError> {
        require_name(app, "application")?;
        Ok(self.record(format!("Closed {}", app)))
    }

    async fn open_file(&self, name: &str, folder: bool) -> Result<ActionResult, ActionError> {
        let kind = if folder { "folder" } else { "file" };
        require_name(name, kind)?;
        Ok(self.record(format!("Opened {} {}", kind, name)))
    }
}

#[cfg(test)]
#[path = "dry_run_test.rs"]
mod tests;
