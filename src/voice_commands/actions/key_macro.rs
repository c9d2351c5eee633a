// Key macro parsing - symbolic key combinations like "Ctrl+Shift+S"

use super::{ActionError, ActionErrorCode};
use serde::Serialize;

/// Modifier keys, in the order they are pressed
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Win,
}

impl Modifier {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            "win" | "super" | "meta" | "cmd" => Some(Modifier::Win),
            _ => None,
        }
    }
}

/// Named keys in their canonical spelling, matched case-insensitively
const NAMED_KEYS: &[&str] = &[
    "Up", "Down", "Left", "Right", "Home", "End", "PageUp", "PageDown", "Insert", "Delete",
    "Backspace", "Tab", "Enter", "Escape", "Space", "PrintScreen", "Plus", "Minus", "Comma",
    "Period", "VolumeUp", "VolumeDown", "VolumeMute",
];

/// Canonical spelling of a key: letters upper-cased, named and function
/// keys in their table spelling, anything else unchanged
fn canonical_key(key: &str) -> String {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.to_uppercase().collect();
    }
    if let Some(named) = NAMED_KEYS.iter().find(|k| k.eq_ignore_ascii_case(key)) {
        return named.to_string();
    }
    let lower = key.to_ascii_lowercase();
    if let Some(number) = lower.strip_prefix('f') {
        if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
            return format!("F{}", number);
        }
    }
    key.to_string()
}

/// A parsed key combination: zero or more modifiers plus one key
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl std::fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{:?}+", modifier)?;
        }
        write!(f, "{}", self.key)
    }
}

/// Parse a macro string.
///
/// Every `+`-separated part except the last must be a modifier; the last
/// part is the key itself. Duplicate modifiers are collapsed.
pub fn parse_macro(key_macro: &str) -> Result<KeyCombo, ActionError> {
    let parts: Vec<&str> = key_macro.split('+').map(str::trim).collect();
    let invalid = |reason: &str| {
        ActionError::new(
            ActionErrorCode::InvalidMacro,
            format!("Invalid key macro '{}': {}", key_macro, reason),
        )
    };

    let (key, modifier_parts) = match parts.split_last() {
        Some((key, rest)) if !key.is_empty() => (*key, rest),
        _ => return Err(invalid("missing key")),
    };

    if Modifier::parse(key).is_some() {
        return Err(invalid("ends with a modifier"));
    }

    let mut modifiers = Vec::with_capacity(modifier_parts.len());
    for part in modifier_parts {
        let modifier = Modifier::parse(part).ok_or_else(|| invalid(&format!("unknown modifier '{}'", part)))?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }
    modifiers.sort();

    Ok(KeyCombo {
        modifiers,
        key: canonical_key(key),
    })
}

#[cfg(test)]
#[path = "key_macro_test.rs"]
mod tests;
