// Duplicate suppressor - time-windowed rejection of repeated commands

use crate::voice_commands::matcher::normalize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Default window in which an identical command is suppressed
pub const DEFAULT_DEDUP_WINDOW_MS: u64 = 1000;

/// A rule marking text as legitimately repeatable.
///
/// All comparisons are on normalized text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExemptionRule {
    /// Whole text equals the value
    Exact { text: String },
    /// Text contains the value
    Contains { text: String },
    /// Text contains `word` and at least one of `any`
    ContainsWithAny { word: String, any: Vec<String> },
    /// Text contains every value
    ContainsAll { all: Vec<String> },
}

impl ExemptionRule {
    pub fn exact(text: &str) -> Self {
        ExemptionRule::Exact { text: normalize(text) }
    }

    pub fn contains(text: &str) -> Self {
        ExemptionRule::Contains { text: normalize(text) }
    }

    pub fn contains_with_any(word: &str, any: &[&str]) -> Self {
        ExemptionRule::ContainsWithAny {
            word: normalize(word),
            any: any.iter().map(|a| normalize(a)).collect(),
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            ExemptionRule::Exact { text } => normalized == text,
            ExemptionRule::Contains { text } => normalized.contains(text.as_str()),
            ExemptionRule::ContainsWithAny { word, any } => {
                normalized.contains(word.as_str()) && any.iter().any(|a| normalized.contains(a.as_str()))
            }
            ExemptionRule::ContainsAll { all } => all.iter().all(|a| normalized.contains(a.as_str())),
        }
    }
}

/// Built-in repeatable commands: volume, single-key navigation, paging,
/// scrolling, undo and redo
pub fn default_exemptions() -> Vec<ExemptionRule> {
    let mut rules = vec![ExemptionRule::contains_with_any("ses", &["art", "azalt", "kapat", "aç"])];
    rules.extend(
        [
            "sağ", "sol", "yukarı", "aşağı", "enter", "tab", "boşluk", "önceki", "sonraki",
            "geri al", "ileri al",
        ]
        .iter()
        .map(|t| ExemptionRule::exact(t)),
    );
    rules.push(ExemptionRule::contains_with_any("sayfa", &["yukarı", "aşağı"]));
    rules.push(ExemptionRule::contains("kaydır"));
    rules
}

/// Result of checking text against the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupDecision {
    /// Not a repeat, or the window has passed
    Pass,
    /// Repeat inside the window, but exempt
    Exempt,
    /// Repeat inside the window
    Suppress,
}

/// Single-slot duplicate suppressor.
///
/// State only moves on [`DuplicateSuppressor::accept`], so a rejected or
/// unresolved utterance never blocks a legitimate repeat.
#[derive(Debug)]
pub struct DuplicateSuppressor {
    window: Duration,
    exemptions: Vec<ExemptionRule>,
    last: Option<(String, Instant)>,
}

impl Default for DuplicateSuppressor {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEDUP_WINDOW_MS), default_exemptions())
    }
}

impl DuplicateSuppressor {
    pub fn new(window: Duration, exemptions: Vec<ExemptionRule>) -> Self {
        Self {
            window,
            exemptions,
            last: None,
        }
    }

    pub fn is_exempt(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.exemptions.iter().any(|rule| rule.matches(&normalized))
    }

    pub fn check(&self, text: &str) -> DedupDecision {
        self.check_at(text, Instant::now())
    }

    pub fn check_at(&self, text: &str, now: Instant) -> DedupDecision {
        let normalized = normalize(text);
        let repeated = match &self.last {
            Some((last_text, at)) => {
                *last_text == normalized && now.saturating_duration_since(*at) < self.window
            }
            None => false,
        };

        if !repeated {
            DedupDecision::Pass
        } else if self.exemptions.iter().any(|rule| rule.matches(&normalized)) {
            DedupDecision::Exempt
        } else {
            DedupDecision::Suppress
        }
    }

    /// Record an accepted resolution
    pub fn accept(&mut self, text: &str) {
        self.accept_at(text, Instant::now());
    }

    pub fn accept_at(&mut self, text: &str, now: Instant) {
        self.last = Some((normalize(text), now));
    }

    /// Forget the last accepted command
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last.as_ref().map(|(t, _)| t.as_str())
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;
