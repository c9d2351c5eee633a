// Resolver chain - turns raw text into an executable command
//
// Stages run in fixed priority order and the first one that produces a
// command wins:
//   1. duplicate suppression gate
//   2. literal-pattern rules (carry an app or file name)
//   3. domain resolvers, in registration order
//   4. registry lookup (exact, then substring), then opt-in fuzzy lookup
//   5. legacy open/close heuristic

pub mod domain;
pub mod legacy;
pub mod patterns;

use crate::voice_commands::command::ExecutableCommand;
use crate::voice_commands::dedup::{DedupDecision, DuplicateSuppressor};
use crate::voice_commands::matcher::{normalize, MatchKind, TriggerMatcher};
use crate::voice_commands::registry::CommandRegistry;
use domain::DomainResolver;
use patterns::LiteralPatternResolver;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Which stage produced a command
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStage {
    LiteralPattern,
    Domain,
    Registry,
    Fuzzy,
    Legacy,
}

/// A command plus how it was found
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub command: ExecutableCommand,
    pub stage: ResolutionStage,
    /// Match confidence (0.0 to 1.0)
    pub confidence: f64,
    /// Trigger, rule or resolver name that matched
    pub matched_by: String,
}

/// Result of walking the chain
#[derive(Debug, Clone, PartialEq)]
pub enum ChainOutcome {
    Resolved(Resolution),
    /// Identical text accepted within the dedup window
    Suppressed,
    NoMatch,
}

/// Configuration for the chain
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Try fuzzy registry lookup when exact/substring find nothing
    pub fuzzy_enabled: bool,
    /// Try the legacy heuristic as a last resort
    pub legacy_enabled: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            fuzzy_enabled: true,
            legacy_enabled: true,
        }
    }
}

/// Ordered resolver chain
pub struct ResolverChain {
    literal: LiteralPatternResolver,
    domains: Vec<Arc<dyn DomainResolver>>,
    matcher: TriggerMatcher,
    config: ChainConfig,
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new(TriggerMatcher::new())
    }
}

impl ResolverChain {
    /// Chain with the literal-pattern table, no domain resolvers
    pub fn new(matcher: TriggerMatcher) -> Self {
        Self {
            literal: LiteralPatternResolver::new(),
            domains: Vec::new(),
            matcher,
            config: ChainConfig::default(),
        }
    }

    /// Append a domain resolver (builder pattern)
    pub fn with_domain_resolver(mut self, resolver: Arc<dyn DomainResolver>) -> Self {
        self.domains.push(resolver);
        self
    }

    pub fn with_config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    pub fn domain_names(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.name().to_string()).collect()
    }

    /// Walk the chain for `text`.
    ///
    /// `gate` is consulted first and only updated when a command is produced.
    pub fn resolve(
        &self,
        text: &str,
        registry: &CommandRegistry,
        gate: &mut DuplicateSuppressor,
    ) -> ChainOutcome {
        let normalized = normalize(text);
        if normalized.is_empty() {
            crate::debug!("[ResolverChain] Empty command text");
            return ChainOutcome::NoMatch;
        }

        match gate.check(&normalized) {
            DedupDecision::Suppress => {
                crate::info!(
                    "[ResolverChain] Same command repeated too quickly, ignoring: '{}'",
                    normalized
                );
                return ChainOutcome::Suppressed;
            }
            DedupDecision::Exempt => {
                crate::debug!("[ResolverChain] Repeat allowed for exempt command '{}'", normalized);
            }
            DedupDecision::Pass => {}
        }

        match self.resolve_stages(text, &normalized, registry) {
            Some(resolution) => {
                crate::info!(
                    "[ResolverChain] '{}' resolved by {:?} ({}) to {}",
                    normalized,
                    resolution.stage,
                    resolution.matched_by,
                    resolution.command.command_id()
                );
                gate.accept(&normalized);
                ChainOutcome::Resolved(resolution)
            }
            None => {
                crate::debug!("[ResolverChain] No resolver accepted '{}'", normalized);
                ChainOutcome::NoMatch
            }
        }
    }

    fn resolve_stages(
        &self,
        raw: &str,
        normalized: &str,
        registry: &CommandRegistry,
    ) -> Option<Resolution> {
        if let Some((rule, command)) = self.literal.resolve(raw, normalized) {
            return Some(Resolution {
                command,
                stage: ResolutionStage::LiteralPattern,
                confidence: 1.0,
                matched_by: rule.to_string(),
            });
        }

        if let Some(resolution) = self.resolve_domains(raw) {
            return Some(resolution);
        }

        let registry_match = registry.find_match(raw).or_else(|| {
            if self.config.fuzzy_enabled {
                self.matcher.find_fuzzy(raw, registry.get_all())
            } else {
                None
            }
        });
        if let Some(found) = registry_match {
            let stage = match found.kind {
                MatchKind::Fuzzy => ResolutionStage::Fuzzy,
                MatchKind::Exact | MatchKind::Substring => ResolutionStage::Registry,
            };
            return Some(Resolution {
                command: ExecutableCommand::from_descriptor(raw, found.descriptor),
                stage,
                confidence: found.score,
                matched_by: found.trigger,
            });
        }

        if self.config.legacy_enabled {
            if let Some(command) = legacy::resolve(raw, normalized) {
                return Some(Resolution {
                    command,
                    stage: ResolutionStage::Legacy,
                    confidence: 0.5,
                    matched_by: "legacy".to_string(),
                });
            }
        }

        None
    }

    fn resolve_domains(&self, raw: &str) -> Option<Resolution> {
        resolve_with_domains(&self.domains, raw).map(|(name, command)| Resolution {
            command,
            stage: ResolutionStage::Domain,
            confidence: 1.0,
            matched_by: name,
        })
    }
}

/// First domain resolver that accepts `text` and builds successfully.
///
/// Build failures and panics are logged and the next resolver is tried.
pub fn resolve_with_domains(
    resolvers: &[Arc<dyn DomainResolver>],
    text: &str,
) -> Option<(String, ExecutableCommand)> {
    for resolver in resolvers {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            if resolver.can_handle(text) {
                Some(resolver.build(text))
            } else {
                None
            }
        }));
        match attempt {
            Ok(None) => {}
            Ok(Some(Ok(command))) => return Some((resolver.name().to_string(), command)),
            Ok(Some(Err(e))) => {
                crate::warn!("[ResolverChain] Domain resolver unavailable, skipping: {}", e);
            }
            Err(_) => {
                crate::error!(
                    "[ResolverChain] Domain resolver '{}' panicked on '{}', skipping",
                    resolver.name(),
                    text
                );
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
