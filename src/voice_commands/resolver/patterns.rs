// Literal-pattern resolvers - compound phrases that carry a parameter
// Uses anchored regexes over normalized text, tried in table order

use crate::voice_commands::command::ExecutableCommand;
use regex::Regex;

/// What a literal pattern builds from its captured name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    OpenFile,
    OpenFolder,
    OpenApplication,
    CloseApplication,
}

/// Pattern table in priority order. Each regex captures `name`.
const PATTERNS: &[(&str, &str, LiteralKind)] = &[
    (
        "open_file",
        r"^(?P<name>.+?)\s+(?:dosyasını|dosyası)\s+(?:aç|göster)$",
        LiteralKind::OpenFile,
    ),
    (
        "open_folder",
        r"^(?P<name>.+?)\s+(?:klasörünü|klasörü)\s+(?:aç|göster)$",
        LiteralKind::OpenFolder,
    ),
    (
        "open_application",
        r"^(?P<name>.+?)\s+(?:uygulamasını|programını)\s+(?:aç|başlat|çalıştır)$",
        LiteralKind::OpenApplication,
    ),
    (
        "close_application",
        r"^(?P<name>.+?)(?:['’](?:y|n)?[ıiuü]|\s+uygulamasını|\s+uygulaması|\s+programını)\s+(?:kapat|sonlandır)$",
        LiteralKind::CloseApplication,
    ),
];

/// Compiled pattern for a single table row
struct LiteralRule {
    name: &'static str,
    regex: Regex,
    kind: LiteralKind,
}

/// Ordered literal-pattern resolver
pub struct LiteralPatternResolver {
    rules: Vec<LiteralRule>,
}

impl Default for LiteralPatternResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralPatternResolver {
    /// Compile the pattern table; rows that fail to compile are skipped
    pub fn new() -> Self {
        let rules = PATTERNS
            .iter()
            .filter_map(|&(name, pattern, kind)| match Regex::new(pattern) {
                Ok(regex) => Some(LiteralRule {
                    name,
                    regex,
                    kind,
                }),
                Err(e) => {
                    crate::warn!("[LiteralPatterns] Failed to compile '{}': {}", name, e);
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Names of the active rules in priority order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// First rule that matches `normalized` and captures a non-empty name
    pub fn resolve(&self, raw: &str, normalized: &str) -> Option<(&'static str, ExecutableCommand)> {
        self.rules.iter().find_map(|rule| {
            let captures = rule.regex.captures(normalized)?;
            let name = captures.name("name")?.as_str().trim();
            if name.is_empty() {
                return None;
            }
            crate::debug!("[LiteralPatterns] '{}' matched rule {}", normalized, rule.name);
            Some((rule.name, build(rule.kind, raw, name)))
        })
    }
}

fn build(kind: LiteralKind, raw: &str, name: &str) -> ExecutableCommand {
    let text = raw.to_string();
    let name = name.to_string();
    match kind {
        LiteralKind::OpenFile => ExecutableCommand::OpenFile { text, name, folder: false },
        LiteralKind::OpenFolder => ExecutableCommand::OpenFile { text, name, folder: true },
        LiteralKind::OpenApplication => ExecutableCommand::OpenApplication { text, app: name },
        LiteralKind::CloseApplication => ExecutableCommand::CloseApplication { text, app: name },
    }
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
