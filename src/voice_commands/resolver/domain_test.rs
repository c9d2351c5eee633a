use super::*;

#[test]
fn test_news_resolver_accepts_category_with_keyword() {
    let resolver = news_category_resolver();
    assert!(resolver.can_handle("Spor haberleri"));
    assert!(resolver.can_handle("ekonomi haberlerini oku"));

    let cmd = resolver.build("Spor haberleri").unwrap();
    assert_eq!(
        cmd,
        ExecutableCommand::Custom {
            text: "Spor haberleri".to_string(),
            resolver: "news".to_string(),
            token: "read_news".to_string(),
            argument: Some("spor".to_string()),
        }
    );
}

#[test]
fn test_news_resolver_needs_both_subject_and_keyword() {
    let resolver = news_category_resolver();
    assert!(!resolver.can_handle("spor"));
    assert!(!resolver.can_handle("son haberler"));
    assert!(!resolver.can_handle("kaydet"));
}

#[test]
fn test_build_without_subject_fails() {
    let resolver = news_category_resolver();
    let err = resolver.build("kaydet").unwrap_err();
    assert!(matches!(err, ResolverError::BuildFailed { .. }));
}
