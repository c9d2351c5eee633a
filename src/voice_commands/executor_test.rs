use super::*;
use crate::focus::{ActiveWindowInfo, DryRunPlatform, FocusState, PlatformError, WindowPlatform};
use crate::voice_commands::actions::DryRunActions;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

/// Key macro mock that fails for configured macros and records every call
struct MockKeys {
    failing: Vec<String>,
    calls: Arc<StdMutex<Vec<String>>>,
}

impl MockKeys {
    fn new(failing: &[&str]) -> Self {
        Self {
            failing: failing.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyMacroCapability for MockKeys {
    async fn send_macro(&self, key_macro: &str) -> Result<ActionResult, ActionError> {
        self.calls.lock().unwrap().push(key_macro.to_string());
        if self.failing.iter().any(|f| f == key_macro) {
            return Err(ActionError::new(ActionErrorCode::ExecutionError, "key rejected"));
        }
        Ok(ActionResult::message(format!("sent {}", key_macro)))
    }
}

struct PanickingCustom;

#[async_trait]
impl CustomActionCapability for PanickingCustom {
    async fn run(&self, _token: &str, _text: &str) -> Result<ActionResult, ActionError> {
        panic!("custom handler crashed");
    }
}

/// Platform where the target never comes to the front
#[derive(Default)]
struct UnfocusablePlatform {
    restores: AtomicUsize,
}

#[async_trait]
impl WindowPlatform for UnfocusablePlatform {
    async fn is_application_running(&self, _app: &str) -> bool {
        true
    }

    async fn launch(&self, _app: &str) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn switch_to(&self, _app: &str) -> bool {
        false
    }

    async fn active_window(&self) -> Option<ActiveWindowInfo> {
        None
    }

    async fn active_window_title(&self) -> Option<String> {
        Some("Something else".to_string())
    }

    async fn cycle_window(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn restore(&self, _window: &ActiveWindowInfo) -> bool {
        self.restores.fetch_add(1, Ordering::SeqCst);
        true
    }
}

fn executor_with(
    platform: Arc<dyn WindowPlatform>,
    keys: Arc<dyn KeyMacroCapability>,
    custom: Arc<dyn CustomActionCapability>,
) -> CommandExecutor {
    CommandExecutor::new(
        FocusCoordinator::new(platform),
        keys,
        custom,
        Arc::new(DryRunActions::new()),
    )
}

fn command_for(descriptor: CommandDescriptor, text: &str) -> ExecutableCommand {
    ExecutableCommand::from_descriptor(text, &descriptor)
}

#[tokio::test(start_paused = true)]
async fn test_system_wide_macro_executes() {
    let keys = Arc::new(MockKeys::new(&[]));
    let executor = executor_with(
        Arc::new(DryRunPlatform::new()),
        keys.clone(),
        Arc::new(DryRunActions::new()),
    );
    let command = command_for(
        CommandDescriptor::system_wide("volume_up", "Volume up", &["sesi arttır"], "VolumeUp"),
        "sesi arttır",
    );

    let report = executor.execute(&command).await;

    assert!(report.succeeded());
    assert!(!report.used_alternative);
    assert_eq!(keys.calls(), vec!["VolumeUp".to_string()]);
    assert_eq!(executor.last_executed(), Some(command));
}

#[tokio::test(start_paused = true)]
async fn test_alternative_macro_is_tried_once() {
    let keys = Arc::new(MockKeys::new(&["Ctrl+Shift+S"]));
    let executor = executor_with(
        Arc::new(DryRunPlatform::new()),
        keys.clone(),
        Arc::new(DryRunActions::new()),
    );
    let command = command_for(
        CommandDescriptor::active_window("save_as", "Save as", &["farklı kaydet"], "Ctrl+Shift+S")
            .with_alternative_macro("F12"),
        "farklı kaydet",
    );

    let report = executor.execute(&command).await;

    assert!(report.succeeded());
    assert!(report.used_alternative);
    assert_eq!(keys.calls(), vec!["Ctrl+Shift+S".to_string(), "F12".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_failing_alternative_reports_action_error() {
    let keys = Arc::new(MockKeys::new(&["Ctrl+Shift+S", "F12"]));
    let executor = executor_with(
        Arc::new(DryRunPlatform::new()),
        keys.clone(),
        Arc::new(DryRunActions::new()),
    );
    let command = command_for(
        CommandDescriptor::active_window("save_as", "Save as", &["farklı kaydet"], "Ctrl+Shift+S")
            .with_alternative_macro("F12"),
        "farklı kaydet",
    );

    let report = executor.execute(&command).await;

    assert!(matches!(report.outcome, Err(ExecutionError::Action(_))));
    assert_eq!(keys.calls().len(), 2);
    assert!(executor.last_executed().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_focus_failure_skips_action() {
    let keys = Arc::new(MockKeys::new(&[]));
    let executor = executor_with(
        Arc::new(UnfocusablePlatform::default()),
        keys.clone(),
        Arc::new(DryRunActions::new()),
    );
    let command = command_for(
        CommandDescriptor::specific_application(
            "outlook_new_mail",
            "New mail",
            &["yeni e-posta"],
            "outlook",
            "Ctrl+N",
        ),
        "yeni e-posta",
    );

    let report = executor.execute(&command).await;

    assert!(matches!(
        report.outcome,
        Err(ExecutionError::Focus(FocusError::NotFocused { .. }))
    ));
    assert_eq!(report.transition.state(), FocusState::Failed);
    assert!(keys.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_specific_application_restores_original_window() {
    let platform = Arc::new(DryRunPlatform::new());
    let original = ActiveWindowInfo {
        handle: 99,
        app_name: "Editor".to_string(),
        window_title: Some("notes".to_string()),
    };
    platform.restore(&original).await;

    let executor = executor_with(
        platform.clone(),
        Arc::new(MockKeys::new(&[])),
        Arc::new(DryRunActions::new()),
    );
    let command = command_for(
        CommandDescriptor::specific_application(
            "outlook_new_mail",
            "New mail",
            &["yeni e-posta"],
            "outlook",
            "Ctrl+N",
        ),
        "yeni e-posta",
    );

    let report = executor.execute(&command).await;

    assert!(report.succeeded());
    assert!(report.restored_focus);
    assert_eq!(report.transition.original, Some(original.clone()));
    assert_eq!(platform.active_window().await, Some(original));
    assert!(report.elapsed >= Duration::from_millis(2000 + 500));
}

#[tokio::test(start_paused = true)]
async fn test_return_focus_can_be_disabled() {
    let platform = Arc::new(DryRunPlatform::new());
    let executor = executor_with(
        platform.clone(),
        Arc::new(MockKeys::new(&[])),
        Arc::new(DryRunActions::new()),
    );
    let command = command_for(
        CommandDescriptor::specific_application("teams_mute", "Mute", &["sustur"], "teams", "Ctrl+Shift+M")
            .with_return_focus(false),
        "sustur",
    );

    let report = executor.execute(&command).await;

    assert!(report.succeeded());
    assert!(!report.restored_focus);
    assert_eq!(platform.active_window().await.unwrap().app_name, "teams");
}

#[tokio::test]
async fn test_panicking_action_becomes_task_panic_error() {
    let executor = executor_with(
        Arc::new(DryRunPlatform::new()),
        Arc::new(MockKeys::new(&[])),
        Arc::new(PanickingCustom),
    );
    let command = command_for(
        CommandDescriptor::custom("start_dictation", "Dictation", &["dikte başlat"], "start_dictation")
            .with_post_focus_delay(0),
        "dikte başlat",
    );

    let report = executor.execute(&command).await;

    match report.outcome {
        Err(ExecutionError::Action(error)) => assert_eq!(error.code, ActionErrorCode::TaskPanic),
        other => panic!("Expected task panic, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ad_hoc_commands_use_application_capability() {
    let apps = Arc::new(DryRunActions::new());
    let executor = CommandExecutor::new(
        FocusCoordinator::new(Arc::new(DryRunPlatform::new())),
        Arc::new(MockKeys::new(&[])),
        Arc::new(DryRunActions::new()),
        apps.clone(),
    );

    let open = ExecutableCommand::OpenApplication {
        text: "outlook aç".to_string(),
        app: "outlook".to_string(),
    };
    let close = ExecutableCommand::CloseApplication {
        text: "whatsapp'ı kapat".to_string(),
        app: "whatsapp".to_string(),
    };
    let file = ExecutableCommand::OpenFile {
        text: "rapor dosyasını aç".to_string(),
        name: "rapor".to_string(),
        folder: false,
    };
    for command in [&open, &close, &file] {
        assert!(executor.execute(command).await.succeeded());
    }

    assert_eq!(
        apps.journal(),
        vec![
            "Opened outlook".to_string(),
            "Closed whatsapp".to_string(),
            "Opened file rapor".to_string(),
        ]
    );
    assert_eq!(executor.last_executed(), Some(file));
}

#[tokio::test]
async fn test_domain_custom_command_passes_argument() {
    let custom = Arc::new(DryRunActions::new());
    let executor = executor_with(
        Arc::new(DryRunPlatform::new()),
        Arc::new(MockKeys::new(&[])),
        custom.clone(),
    );
    let command = ExecutableCommand::Custom {
        text: "spor haberleri".to_string(),
        resolver: "news".to_string(),
        token: "read_news".to_string(),
        argument: Some("spor".to_string()),
    };

    assert!(executor.execute(&command).await.succeeded());
    assert_eq!(custom.journal(), vec!["Ran read_news with 'spor'".to_string()]);
}
