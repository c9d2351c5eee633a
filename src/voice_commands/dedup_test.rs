use super::*;

fn gate() -> DuplicateSuppressor {
    DuplicateSuppressor::default()
}

#[test]
fn test_first_occurrence_passes() {
    assert_eq!(gate().check("outlook aç"), DedupDecision::Pass);
}

#[test]
fn test_repeat_inside_window_is_suppressed() {
    let mut gate = gate();
    let start = Instant::now();
    gate.accept_at("outlook aç", start);

    let decision = gate.check_at("Outlook aç.", start + Duration::from_millis(100));
    assert_eq!(decision, DedupDecision::Suppress);
}

#[test]
fn test_repeat_after_window_passes() {
    let mut gate = gate();
    let start = Instant::now();
    gate.accept_at("outlook aç", start);

    let decision = gate.check_at("outlook aç", start + Duration::from_millis(1000));
    assert_eq!(decision, DedupDecision::Pass);
}

#[test]
fn test_exempt_repeat_is_allowed() {
    let mut gate = gate();
    let start = Instant::now();
    for text in ["sağ", "sesi arttır", "sayfa aşağı", "aşağı kaydır", "geri al"] {
        gate.accept_at(text, start);
        assert_eq!(
            gate.check_at(text, start + Duration::from_millis(100)),
            DedupDecision::Exempt,
            "'{}' should be exempt",
            text
        );
    }
}

#[test]
fn test_different_text_passes() {
    let mut gate = gate();
    let start = Instant::now();
    gate.accept_at("kaydet", start);
    assert_eq!(gate.check_at("kopyala", start), DedupDecision::Pass);
}

#[test]
fn test_check_does_not_update_state() {
    let mut gate = gate();
    let start = Instant::now();
    gate.check_at("kaydet", start);
    assert!(gate.last_text().is_none());

    gate.accept_at("kaydet", start);
    assert_eq!(gate.last_text(), Some("kaydet"));
    gate.reset();
    assert!(gate.last_text().is_none());
}

#[test]
fn test_default_exemption_rules() {
    let gate = gate();
    assert!(gate.is_exempt("ses aç"));
    assert!(gate.is_exempt("sesi azalt"));
    assert!(gate.is_exempt("Sol"));
    assert!(gate.is_exempt("sayfa yukarı"));
    assert!(gate.is_exempt("ileri al"));

    assert!(!gate.is_exempt("sağa hizala"));
    assert!(!gate.is_exempt("outlook aç"));
    assert!(!gate.is_exempt("geri"));
}

#[test]
fn test_custom_exemptions_replace_defaults() {
    let mut gate = DuplicateSuppressor::new(
        Duration::from_millis(500),
        vec![ExemptionRule::ContainsAll {
            all: vec!["zoom".to_string(), "in".to_string()],
        }],
    );
    let start = Instant::now();

    gate.accept_at("zoom in", start);
    assert_eq!(gate.check_at("zoom in", start), DedupDecision::Exempt);

    gate.accept_at("sağ", start);
    assert_eq!(gate.check_at("sağ", start), DedupDecision::Suppress);
}

#[test]
fn test_exemption_rules_deserialize_from_toml() {
    let toml_src = r#"
        [[rules]]
        type = "exact"
        text = "enter"

        [[rules]]
        type = "contains_with_any"
        word = "ses"
        any = ["art", "azalt"]
    "#;

    #[derive(serde::Deserialize)]
    struct Wrapper {
        rules: Vec<ExemptionRule>,
    }

    let parsed: Wrapper = toml::from_str(toml_src).unwrap();
    assert_eq!(parsed.rules.len(), 2);
    assert!(parsed.rules[0].matches("enter"));
    assert!(parsed.rules[1].matches("sesi arttır"));
}
