// Legacy heuristic - coarse open/close keyword classification, always tried last

use crate::voice_commands::command::ExecutableCommand;

const OPEN_VERBS: &[&str] = &["aç", "başlat"];
const CLOSE_VERBS: &[&str] = &["kapat", "sonlandır"];

/// Filler words dropped when extracting an application name
const FILLER_WORDS: &[&str] = &["uygulamasını", "uygulaması", "programını", "programı", "lütfen"];

/// Coarse intent of unmatched text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyIntent {
    OpenApplication,
    CloseApplication,
    /// Anything else; produces no command
    System,
}

fn has_word(normalized: &str, words: &[&str]) -> bool {
    normalized.split_whitespace().any(|w| words.contains(&w))
}

/// Classify normalized text by its verb
pub fn classify(normalized: &str) -> LegacyIntent {
    if has_word(normalized, OPEN_VERBS) {
        LegacyIntent::OpenApplication
    } else if has_word(normalized, CLOSE_VERBS) {
        LegacyIntent::CloseApplication
    } else {
        LegacyIntent::System
    }
}

/// Strip verbs, filler words and possessive suffixes ("chrome'u" -> "chrome")
pub fn extract_application_name(normalized: &str) -> String {
    normalized
        .split_whitespace()
        .filter(|w| !OPEN_VERBS.contains(w) && !CLOSE_VERBS.contains(w) && !FILLER_WORDS.contains(w))
        .map(|w| match w.find(['\'', '’']) {
            Some(idx) => &w[..idx],
            None => w,
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build an open/close command from unmatched text, if it names an app
pub fn resolve(raw: &str, normalized: &str) -> Option<ExecutableCommand> {
    let intent = classify(normalized);
    if intent == LegacyIntent::System {
        return None;
    }

    let app = extract_application_name(normalized);
    if app.is_empty() {
        crate::debug!("[Legacy] No application name in '{}'", normalized);
        return None;
    }

    let text = raw.to_string();
    Some(match intent {
        LegacyIntent::OpenApplication => ExecutableCommand::OpenApplication { text, app },
        _ => ExecutableCommand::CloseApplication { text, app },
    })
}

#[cfg(test)]
#[path = "legacy_test.rs"]
mod tests;
