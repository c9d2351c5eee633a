// Pipeline configuration - TOML file under the user config directory

use crate::focus::coordinator::{
    DEFAULT_LAUNCH_SETTLE_MS, DEFAULT_WINDOW_CYCLE_ATTEMPTS, DEFAULT_WINDOW_CYCLE_DELAY_MS,
};
use crate::focus::{FocusConfig, LaunchWait};
use crate::voice_commands::dedup::{default_exemptions, ExemptionRule, DEFAULT_DEDUP_WINDOW_MS};
use crate::voice_commands::matcher::DEFAULT_FUZZY_THRESHOLD;
use crate::voice_commands::registry::default_commands_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "voicepilot";
/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors while reading or writing the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for the dispatch pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Command registry file
    #[serde(default = "default_commands_path")]
    pub commands_path: PathBuf,
    /// Window in which an identical command is suppressed
    #[serde(default = "default_dedup_window_ms")]
    pub dedup_window_ms: u64,
    #[serde(default = "default_true")]
    pub fuzzy_enabled: bool,
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// Wait after launching an application
    #[serde(default = "default_launch_settle_ms")]
    pub launch_settle_ms: u64,
    #[serde(default = "default_launch_wait")]
    pub launch_wait: LaunchWait,
    #[serde(default = "default_launch_poll_interval_ms")]
    pub launch_poll_interval_ms: u64,
    #[serde(default = "default_launch_timeout_ms")]
    pub launch_timeout_ms: u64,
    #[serde(default = "default_window_cycle_attempts")]
    pub window_cycle_attempts: u32,
    #[serde(default = "default_window_cycle_delay_ms")]
    pub window_cycle_delay_ms: u64,
    /// Longer inputs are rejected before resolution
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Commands allowed to repeat inside the dedup window
    #[serde(default = "default_exemptions")]
    pub exemptions: Vec<ExemptionRule>,
}

fn default_dedup_window_ms() -> u64 {
    DEFAULT_DEDUP_WINDOW_MS
}
fn default_true() -> bool {
    true
}
fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}
fn default_launch_settle_ms() -> u64 {
    DEFAULT_LAUNCH_SETTLE_MS
}
fn default_launch_wait() -> LaunchWait {
    LaunchWait::Fixed
}
fn default_launch_poll_interval_ms() -> u64 {
    250
}
fn default_launch_timeout_ms() -> u64 {
    10_000
}
fn default_window_cycle_attempts() -> u32 {
    DEFAULT_WINDOW_CYCLE_ATTEMPTS
}
fn default_window_cycle_delay_ms() -> u64 {
    DEFAULT_WINDOW_CYCLE_DELAY_MS
}
fn default_max_input_chars() -> usize {
    500
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            commands_path: default_commands_path(),
            dedup_window_ms: default_dedup_window_ms(),
            fuzzy_enabled: true,
            fuzzy_threshold: default_fuzzy_threshold(),
            launch_settle_ms: default_launch_settle_ms(),
            launch_wait: default_launch_wait(),
            launch_poll_interval_ms: default_launch_poll_interval_ms(),
            launch_timeout_ms: default_launch_timeout_ms(),
            window_cycle_attempts: default_window_cycle_attempts(),
            window_cycle_delay_ms: default_window_cycle_delay_ms(),
            max_input_chars: default_max_input_chars(),
            exemptions: default_exemptions(),
        }
    }
}

impl PipelineConfig {
    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::Invalid(format!(
                "fuzzy_threshold must be between 0 and 1, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.max_input_chars == 0 {
            return Err(ConfigError::Invalid("max_input_chars must be positive".to_string()));
        }
        if self.launch_wait == LaunchWait::Poll && self.launch_poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "launch_poll_interval_ms must be positive when polling".to_string(),
            ));
        }
        Ok(())
    }

    pub fn dedup_window(&self) -> Duration {
        Duration::from_millis(self.dedup_window_ms)
    }

    pub fn focus_config(&self) -> FocusConfig {
        FocusConfig {
            launch_wait: self.launch_wait,
            launch_settle: Duration::from_millis(self.launch_settle_ms),
            poll_interval: Duration::from_millis(self.launch_poll_interval_ms),
            launch_timeout: Duration::from_millis(self.launch_timeout_ms),
            cycle_attempts: self.window_cycle_attempts,
            cycle_delay: Duration::from_millis(self.window_cycle_delay_ms),
        }
    }
}

/// Default configuration file location
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load configuration from `path`, or defaults when the file does not exist
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    if !path.exists() {
        crate::debug!("[Config] {} not found, using defaults", path.display());
        return Ok(PipelineConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: PipelineConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    crate::info!("[Config] Loaded {}", path.display());
    Ok(config)
}

/// Save configuration to `path`, creating parent directories
pub fn save_config(path: &Path, config: &PipelineConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load from the default location, writing defaults there on first run
pub fn load_or_create_config() -> Result<PipelineConfig, ConfigError> {
    load_or_create_config_at(&config_path())
}

pub(crate) fn load_or_create_config_at(path: &Path) -> Result<PipelineConfig, ConfigError> {
    if path.exists() {
        return load_config(path);
    }
    let config = PipelineConfig::default();
    save_config(path, &config)?;
    crate::info!("[Config] Wrote default config to {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
