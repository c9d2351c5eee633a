use super::domain::{news_category_resolver, ResolverError};
use super::*;
use crate::voice_commands::descriptor::CommandDescriptor;
use crate::voice_commands::matcher::MatcherConfig;
use crate::voice_commands::registry::COMMANDS_FILE_NAME;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

fn registry_with(descriptors: Vec<CommandDescriptor>) -> (CommandRegistry, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let mut registry = CommandRegistry::new(temp_dir.path().join(COMMANDS_FILE_NAME));
    for d in descriptors {
        registry.register(d).unwrap();
    }
    (registry, temp_dir)
}

fn default_registry() -> (CommandRegistry, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let registry = CommandRegistry::open(temp_dir.path().join(COMMANDS_FILE_NAME));
    (registry, temp_dir)
}

fn resolved(outcome: ChainOutcome) -> Resolution {
    match outcome {
        ChainOutcome::Resolved(r) => r,
        other => panic!("Expected Resolved, got {:?}", other),
    }
}

/// Domain resolver that accepts everything containing its keyword
struct StubDomain {
    name: &'static str,
    keyword: &'static str,
    fail: bool,
    builds: AtomicUsize,
}

impl StubDomain {
    fn new(name: &'static str, keyword: &'static str, fail: bool) -> Self {
        Self {
            name,
            keyword,
            fail,
            builds: AtomicUsize::new(0),
        }
    }
}

impl DomainResolver for StubDomain {
    fn name(&self) -> &str {
        self.name
    }

    fn can_handle(&self, text: &str) -> bool {
        text.contains(self.keyword)
    }

    fn build(&self, text: &str) -> Result<ExecutableCommand, ResolverError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ResolverError::Unavailable {
                resolver: self.name.to_string(),
                reason: "offline".to_string(),
            });
        }
        Ok(ExecutableCommand::Custom {
            text: text.to_string(),
            resolver: self.name.to_string(),
            token: "stub".to_string(),
            argument: None,
        })
    }
}

#[test]
fn test_literal_close_pattern_beats_registry() {
    let (registry, _temp) = default_registry();
    assert!(registry.find_by_trigger("uygulamayı kapat").is_some());

    let chain = ResolverChain::default();
    let mut gate = DuplicateSuppressor::default();
    let resolution = resolved(chain.resolve("whatsapp'ı kapat", &registry, &mut gate));

    assert_eq!(resolution.stage, ResolutionStage::LiteralPattern);
    assert_eq!(
        resolution.command,
        ExecutableCommand::CloseApplication {
            text: "whatsapp'ı kapat".to_string(),
            app: "whatsapp".to_string(),
        }
    );
}

#[test]
fn test_generic_close_goes_to_registry() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default();
    let mut gate = DuplicateSuppressor::default();

    let resolution = resolved(chain.resolve("uygulamayı kapat", &registry, &mut gate));
    assert_eq!(resolution.stage, ResolutionStage::Registry);
    assert_eq!(resolution.command.command_id(), "close_app");
}

#[test]
fn test_exempt_command_repeats_while_others_are_suppressed() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default();
    let mut gate = DuplicateSuppressor::default();

    let first = resolved(chain.resolve("sağ", &registry, &mut gate));
    let second = resolved(chain.resolve("sağ", &registry, &mut gate));
    assert_eq!(first.command.command_id(), "navigate_right");
    assert_eq!(second.command.command_id(), "navigate_right");

    let open = resolved(chain.resolve("outlook aç", &registry, &mut gate));
    assert_eq!(open.stage, ResolutionStage::Legacy);
    assert_eq!(
        open.command,
        ExecutableCommand::OpenApplication {
            text: "outlook aç".to_string(),
            app: "outlook".to_string(),
        }
    );
    assert_eq!(chain.resolve("outlook aç", &registry, &mut gate), ChainOutcome::Suppressed);
}

#[test]
fn test_app_name_close_to_short_trigger_falls_through_to_legacy() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default();

    for (text, app) in [("paint aç", "paint"), ("spotify aç", "spotify")] {
        let resolution = resolved(chain.resolve(text, &registry, &mut DuplicateSuppressor::default()));
        assert_eq!(resolution.stage, ResolutionStage::Legacy, "{}", text);
        assert_eq!(
            resolution.command,
            ExecutableCommand::OpenApplication {
                text: text.to_string(),
                app: app.to_string(),
            }
        );
    }
}

#[test]
fn test_unmatched_text_does_not_update_gate() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default();
    let mut gate = DuplicateSuppressor::default();

    resolved(chain.resolve("kaydet", &registry, &mut gate));
    assert_eq!(chain.resolve("xyzzy", &registry, &mut gate), ChainOutcome::NoMatch);
    assert_eq!(gate.last_text(), Some("kaydet"));

    // Suppression does not refresh the slot either
    assert_eq!(chain.resolve("kaydet", &registry, &mut gate), ChainOutcome::Suppressed);
    assert_eq!(gate.last_text(), Some("kaydet"));
}

#[test]
fn test_fuzzy_threshold_scenario() {
    let (registry, _temp) = registry_with(vec![CommandDescriptor::system_wide(
        "volume_up",
        "Volume up",
        &["sesi arttır"],
        "VolumeUp",
    )]);

    let lenient = ResolverChain::new(TriggerMatcher::with_config(MatcherConfig { fuzzy_threshold: 0.75 }));
    let resolution = resolved(lenient.resolve("sesi arttıtr", &registry, &mut DuplicateSuppressor::default()));
    assert_eq!(resolution.stage, ResolutionStage::Fuzzy);
    assert_eq!(resolution.command.command_id(), "volume_up");
    assert!(resolution.confidence < 1.0);

    let strict = ResolverChain::new(TriggerMatcher::with_config(MatcherConfig { fuzzy_threshold: 0.95 }));
    assert_eq!(
        strict.resolve("sesi arttıtr", &registry, &mut DuplicateSuppressor::default()),
        ChainOutcome::NoMatch
    );
}

#[test]
fn test_fuzzy_can_be_disabled() {
    let (registry, _temp) = registry_with(vec![CommandDescriptor::system_wide(
        "volume_up",
        "Volume up",
        &["sesi arttır"],
        "VolumeUp",
    )]);
    let chain = ResolverChain::default().with_config(ChainConfig {
        fuzzy_enabled: false,
        legacy_enabled: true,
    });
    assert_eq!(
        chain.resolve("sesi arttıtr", &registry, &mut DuplicateSuppressor::default()),
        ChainOutcome::NoMatch
    );
}

#[test]
fn test_domain_resolver_runs_before_registry() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default().with_domain_resolver(Arc::new(news_category_resolver()));
    let mut gate = DuplicateSuppressor::default();

    let resolution = resolved(chain.resolve("spor haberleri", &registry, &mut gate));
    assert_eq!(resolution.stage, ResolutionStage::Domain);
    assert_eq!(resolution.matched_by, "news");
}

#[test]
fn test_failing_domain_resolver_is_skipped() {
    let (registry, _temp) = default_registry();
    let broken = Arc::new(StubDomain::new("broken", "hava", true));
    let working = Arc::new(StubDomain::new("weather", "hava", false));
    let chain = ResolverChain::default()
        .with_domain_resolver(broken.clone())
        .with_domain_resolver(working.clone());

    let resolution = resolved(chain.resolve("hava durumu", &registry, &mut DuplicateSuppressor::default()));
    assert_eq!(resolution.matched_by, "weather");
    assert_eq!(broken.builds.load(Ordering::SeqCst), 1);
    assert_eq!(working.builds.load(Ordering::SeqCst), 1);
    assert_eq!(chain.domain_names(), vec!["broken".to_string(), "weather".to_string()]);
}

struct PanickingDomain;

impl DomainResolver for PanickingDomain {
    fn name(&self) -> &str {
        "panicky"
    }

    fn can_handle(&self, _text: &str) -> bool {
        true
    }

    fn build(&self, _text: &str) -> Result<ExecutableCommand, ResolverError> {
        panic!("resolver bug");
    }
}

#[test]
fn test_panicking_domain_resolver_is_skipped() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default().with_domain_resolver(Arc::new(PanickingDomain));

    let resolution = resolved(chain.resolve("kaydet", &registry, &mut DuplicateSuppressor::default()));
    assert_eq!(resolution.stage, ResolutionStage::Registry);
}

#[test]
fn test_literal_pattern_runs_before_domain_resolvers() {
    let (registry, _temp) = default_registry();
    let greedy = Arc::new(StubDomain::new("greedy", "kapat", false));
    let chain = ResolverChain::default().with_domain_resolver(greedy.clone());

    let resolution = resolved(chain.resolve("chrome'u kapat", &registry, &mut DuplicateSuppressor::default()));
    assert_eq!(resolution.stage, ResolutionStage::LiteralPattern);
    assert_eq!(greedy.builds.load(Ordering::SeqCst), 0);
}

#[test]
fn test_resolution_is_deterministic() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default();
    let a = chain.resolve("dosyayı kaydet", &registry, &mut DuplicateSuppressor::default());
    let b = chain.resolve("dosyayı kaydet", &registry, &mut DuplicateSuppressor::default());
    assert_eq!(a, b);
}

#[test]
fn test_empty_text_is_no_match() {
    let (registry, _temp) = default_registry();
    let chain = ResolverChain::default();
    assert_eq!(chain.resolve("  ", &registry, &mut DuplicateSuppressor::default()), ChainOutcome::NoMatch);
}
