// Intent detector boundary - optional collaborator that may rewrite command text

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors reported by an intent detector
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntentError {
    #[error("Intent detector unavailable: {0}")]
    Unavailable(String),
    #[error("Intent detection failed: {0}")]
    DetectionFailed(String),
}

/// Result of intent detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    /// Possibly rewritten command text
    pub processed_text: String,
    pub intent_name: Option<String>,
    /// Detector confidence (0.0 - 1.0)
    pub confidence: f64,
    pub success: bool,
}

impl IntentResult {
    /// Result that leaves the text unchanged
    pub fn passthrough(text: &str) -> Self {
        Self {
            processed_text: text.to_string(),
            intent_name: None,
            confidence: 0.0,
            success: false,
        }
    }

    /// Text the pipeline should resolve: the rewrite when detection
    /// succeeded with a non-empty result, otherwise `original`
    pub fn effective_text<'a>(&'a self, original: &'a str) -> &'a str {
        if self.success && !self.processed_text.trim().is_empty() {
            &self.processed_text
        } else {
            original
        }
    }
}

/// Learned intent detector consulted before resolution.
///
/// The pipeline works without one; every failure is recovered locally.
#[async_trait]
pub trait IntentDetector: Send + Sync {
    async fn detect_intent(&self, text: &str) -> Result<IntentResult, IntentError>;

    /// Report whether the command for `text` succeeded
    async fn record_outcome(&self, text: &str, success: bool) -> Result<(), IntentError>;
}

/// Detector that never rewrites and ignores outcomes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIntentDetector;

#[async_trait]
impl IntentDetector for NoopIntentDetector {
    async fn detect_intent(&self, text: &str) -> Result<IntentResult, IntentError> {
        Ok(IntentResult::passthrough(text))
    }

    async fn record_outcome(&self, _text: &str, _success: bool) -> Result<(), IntentError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;
