use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, PipelineConfig::default());
}

#[test]
#[serial]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"
fuzzy_threshold = 0.9
launch_wait = "poll"
dedup_window_ms = 1500
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.fuzzy_threshold, 0.9);
    assert_eq!(config.launch_wait, LaunchWait::Poll);
    assert_eq!(config.dedup_window(), Duration::from_millis(1500));
    assert!(config.fuzzy_enabled);
    assert_eq!(config.launch_settle_ms, 2000);
    assert_eq!(config.window_cycle_attempts, 5);
    assert_eq!(config.max_input_chars, 500);
    assert_eq!(config.exemptions, default_exemptions());
}

#[test]
#[serial]
fn test_custom_exemptions_replace_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"
[[exemptions]]
type = "exact"
text = "sonraki"
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(
        config.exemptions,
        vec![ExemptionRule::Exact {
            text: "sonraki".to_string()
        }]
    );
}

#[test]
#[serial]
fn test_parse_error_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "fuzzy_threshold = \"high\"").unwrap();

    assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
}

#[test]
#[serial]
fn test_out_of_range_threshold_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "fuzzy_threshold = 1.5").unwrap();

    assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));
}

#[test]
#[serial]
fn test_save_then_load_preserves_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);
    let config = PipelineConfig {
        commands_path: temp_dir.path().join("commands.json"),
        launch_wait: LaunchWait::Poll,
        window_cycle_attempts: 3,
        ..PipelineConfig::default()
    };

    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
#[serial]
fn test_load_or_create_writes_defaults_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME);

    let created = load_or_create_config_at(&path).unwrap();
    assert!(path.exists());
    assert_eq!(created, PipelineConfig::default());

    fs::write(&path, "max_input_chars = 80").unwrap();
    let reloaded = load_or_create_config_at(&path).unwrap();
    assert_eq!(reloaded.max_input_chars, 80);
}

#[test]
#[serial]
fn test_focus_config_conversion() {
    let config = PipelineConfig {
        launch_settle_ms: 1000,
        window_cycle_delay_ms: 100,
        ..PipelineConfig::default()
    };
    let focus = config.focus_config();
    assert_eq!(focus.launch_settle, Duration::from_millis(1000));
    assert_eq!(focus.cycle_delay, Duration::from_millis(100));
    assert_eq!(focus.cycle_attempts, 5);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_locations_follow_config_dir() {
    let temp_dir = TempDir::new().unwrap();
    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

    let path = config_path();
    let config = load_or_create_config().unwrap();

    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(path, temp_dir.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    assert!(path.exists());
    assert!(config.commands_path.starts_with(temp_dir.path()));
}
