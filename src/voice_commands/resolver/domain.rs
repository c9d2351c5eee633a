// Domain resolvers - pluggable resolvers for external domains (news, mail, web)

use crate::voice_commands::command::ExecutableCommand;
use crate::voice_commands::matcher::normalize;

/// Error raised by a domain resolver while building its command
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolverError {
    #[error("Resolver '{resolver}' is unavailable: {reason}")]
    Unavailable { resolver: String, reason: String },
    #[error("Resolver '{resolver}' could not build a command: {reason}")]
    BuildFailed { resolver: String, reason: String },
}

/// A resolver for one external domain.
///
/// `can_handle` must be cheap; `build` may fail, in which case the caller
/// skips this resolver and keeps going.
pub trait DomainResolver: Send + Sync {
    /// Identifier used in logs and command ids
    fn name(&self) -> &str;

    /// Whether this resolver wants the text
    fn can_handle(&self, text: &str) -> bool;

    /// Build the command for text this resolver accepted
    fn build(&self, text: &str) -> Result<ExecutableCommand, ResolverError>;
}

/// Keyword resolver: accepts text containing one of `subjects` and one of
/// `keywords`, and emits a custom command whose argument is the subject.
pub struct KeywordResolver {
    name: String,
    token: String,
    subjects: Vec<String>,
    keywords: Vec<String>,
}

impl KeywordResolver {
    pub fn new(name: &str, token: &str, subjects: &[&str], keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            token: token.to_string(),
            subjects: subjects.iter().map(|s| normalize(s)).collect(),
            keywords: keywords.iter().map(|k| normalize(k)).collect(),
        }
    }

    fn subject_of(&self, normalized: &str) -> Option<&str> {
        if !self.keywords.iter().any(|k| normalized.contains(k.as_str())) {
            return None;
        }
        self.subjects
            .iter()
            .find(|s| normalized.contains(s.as_str()))
            .map(|s| s.as_str())
    }
}

impl DomainResolver for KeywordResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, text: &str) -> bool {
        self.subject_of(&normalize(text)).is_some()
    }

    fn build(&self, text: &str) -> Result<ExecutableCommand, ResolverError> {
        let normalized = normalize(text);
        let subject = self.subject_of(&normalized).ok_or_else(|| ResolverError::BuildFailed {
            resolver: self.name.clone(),
            reason: format!("no subject in '{}'", normalized),
        })?;

        Ok(ExecutableCommand::Custom {
            text: text.to_string(),
            resolver: self.name.clone(),
            token: self.token.clone(),
            argument: Some(subject.to_string()),
        })
    }
}

/// News-by-category resolver ("spor haberleri", "ekonomi haberlerini oku")
pub fn news_category_resolver() -> KeywordResolver {
    KeywordResolver::new(
        "news",
        "read_news",
        &["spor", "ekonomi", "teknoloji", "sağlık", "dünya", "magazin", "siyaset", "finans", "borsa"],
        &["haberleri", "haberlerini", "haberler", "haber"],
    )
}

#[cfg(test)]
#[path = "domain_test.rs"]
mod tests;
