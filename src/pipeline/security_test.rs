use super::*;

#[test]
fn test_ordinary_commands_pass() {
    let screen = InputScreen::default();
    for text in ["sesi arttır", "whatsapp'ı kapat", "rapor dosyasını aç", "e-posta gönder", ""] {
        assert_eq!(screen.check(text), Ok(()), "{:?}", text);
    }
}

#[test]
fn test_injection_markers_are_rejected_case_insensitively() {
    let screen = InputScreen::default();
    assert_eq!(
        screen.check("PowerShell -c calc"),
        Err(RejectReason::InjectionMarker("powershell"))
    );
    assert_eq!(
        screen.check("notepad && calc"),
        Err(RejectReason::InjectionMarker("&&"))
    );
    assert_eq!(screen.check("echo $(whoami)"), Err(RejectReason::InjectionMarker("$(")));
    assert!(screen.check("<SCRIPT>alert(1)</script>").is_err());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let screen = InputScreen::new(5);
    // Five characters, more than five bytes
    assert_eq!(screen.check("ğüşöç"), Ok(()));
    assert_eq!(
        screen.check("ğüşöçı"),
        Err(RejectReason::TooLong { len: 6, max: 5 })
    );
}
