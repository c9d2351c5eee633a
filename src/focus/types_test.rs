use super::*;

#[test]
fn test_active_window_info_serialization() {
    let info = ActiveWindowInfo {
        handle: 42,
        app_name: "Outlook".to_string(),
        window_title: Some("Inbox - Outlook".to_string()),
    };

    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains("\"appName\":\"Outlook\""));
    assert!(json.contains("\"windowTitle\":\"Inbox - Outlook\""));

    let deserialized: ActiveWindowInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(info, deserialized);
}

#[test]
fn test_launch_wait_serialization() {
    assert_eq!(serde_json::to_string(&LaunchWait::Fixed).unwrap(), "\"fixed\"");
    assert_eq!(serde_json::to_string(&LaunchWait::Poll).unwrap(), "\"poll\"");
}

#[test]
fn test_focus_error_messages() {
    let err = FocusError::NotFocused {
        app: "outlook".to_string(),
        attempts: 5,
    };
    assert_eq!(err.to_string(), "Could not bring outlook to the front after 5 attempts");
    assert_eq!(PlatformError("boom".to_string()).to_string(), "boom");
}
