// Command registry - stores and persists command descriptors

use crate::voice_commands::defaults::default_descriptors;
use crate::voice_commands::descriptor::{CommandDescriptor, DescriptorError};
use crate::voice_commands::matcher::{MatchResult, TriggerMatcher};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the registry inside the config directory
pub const COMMANDS_FILE_NAME: &str = "commands.json";

/// Error types for registry operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Descriptor rejected at registration
    #[error(transparent)]
    Validation(#[from] DescriptorError),
    /// Failed to persist commands
    #[error("Failed to persist commands: {0}")]
    PersistenceError(String),
    /// Stored commands could not be read or parsed
    #[error("Failed to load commands: {0}")]
    LoadError(String),
}

/// Where the registry contents came from on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Read this many descriptors from the file
    File(usize),
    /// No file or an empty one; defaults were seeded
    SeededMissing,
    /// File was unreadable; defaults were seeded
    SeededCorrupt,
}

/// Durable, ordered collection of command descriptors.
///
/// Order is registration order and decides ties during lookup.
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    config_path: PathBuf,
}

/// Default registry location under the user config directory
pub fn default_commands_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voicepilot")
        .join(COMMANDS_FILE_NAME)
}

impl CommandRegistry {
    /// Create an empty registry backed by the given file
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            commands: Vec::new(),
            config_path,
        }
    }

    /// Create and load a registry in one step
    pub fn open(config_path: PathBuf) -> Self {
        let mut registry = Self::new(config_path);
        registry.load();
        registry
    }

    /// Create and load a registry at the default location
    pub fn open_default() -> Self {
        Self::open(default_commands_path())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load commands from the persistence file.
    ///
    /// A missing, empty or corrupt file is never fatal: defaults are seeded
    /// and written back.
    pub fn load(&mut self) -> LoadSource {
        crate::debug!("[Registry] Loading commands from {:?}", self.config_path);

        let source = match self.read_file() {
            Ok(commands) if !commands.is_empty() => {
                let count = commands.len();
                self.commands = commands;
                crate::info!("[Registry] Loaded {} commands", count);
                return LoadSource::File(count);
            }
            Ok(_) => {
                crate::info!("[Registry] No stored commands, seeding defaults");
                LoadSource::SeededMissing
            }
            Err(e) => {
                crate::warn!("[Registry] Stored commands are corrupt, seeding defaults: {}", e);
                LoadSource::SeededCorrupt
            }
        };

        self.commands = default_descriptors();
        if let Err(e) = self.persist(&self.commands) {
            crate::error!("[Registry] Failed to write default commands: {}", e);
        }
        source
    }

    fn read_file(&self) -> Result<Vec<CommandDescriptor>, RegistryError> {
        if !self.config_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| RegistryError::LoadError(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let commands: Vec<CommandDescriptor> = serde_json::from_str(&content)
            .map_err(|e| RegistryError::LoadError(e.to_string()))?;

        for cmd in &commands {
            cmd.validate()
                .map_err(|e| RegistryError::LoadError(e.to_string()))?;
        }
        Ok(commands)
    }

    /// Persist commands to the file using atomic write (temp file + rename)
    fn persist(&self, commands: &[CommandDescriptor]) -> Result<(), RegistryError> {
        crate::debug!(
            "[Registry] Persisting {} commands to {:?}",
            commands.len(),
            self.config_path
        );

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RegistryError::PersistenceError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(commands)
            .map_err(|e| RegistryError::PersistenceError(e.to_string()))?;

        let temp_path = self.config_path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path).map_err(|e| {
                RegistryError::PersistenceError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| RegistryError::PersistenceError(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .map_err(|e| RegistryError::PersistenceError(format!("Failed to sync: {}", e)))?;
        }

        fs::rename(&temp_path, &self.config_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            RegistryError::PersistenceError(format!("Failed to rename: {}", e))
        })?;

        Ok(())
    }

    /// Write `commands` and only then make them the live set.
    ///
    /// On a failed write the in-memory set is left untouched.
    fn commit(&mut self, commands: Vec<CommandDescriptor>) -> Result<(), RegistryError> {
        self.persist(&commands)?;
        self.commands = commands;
        Ok(())
    }

    /// Add a descriptor, replacing any existing one with the same id in place
    #[must_use = "this returns a Result that should be handled"]
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), RegistryError> {
        descriptor.validate()?;

        let mut commands = self.commands.clone();
        match commands.iter_mut().find(|c| c.id == descriptor.id) {
            Some(existing) => {
                crate::debug!("[Registry] Replacing command {}", descriptor.id);
                *existing = descriptor;
            }
            None => {
                crate::debug!("[Registry] Adding command {}", descriptor.id);
                commands.push(descriptor);
            }
        }
        self.commit(commands)
    }

    /// Remove a descriptor by id; Ok(false) if it was not registered
    #[must_use = "this returns a Result that should be handled"]
    pub fn unregister(&mut self, id: &str) -> Result<bool, RegistryError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let commands = self
            .commands
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        self.commit(commands)?;
        Ok(true)
    }

    /// Replace everything with the built-in set
    #[must_use = "this returns a Result that should be handled"]
    pub fn reset_to_defaults(&mut self) -> Result<(), RegistryError> {
        self.commit(default_descriptors())
    }

    /// Exact match of the whole input against any trigger, then substring
    /// containment in either direction. No fuzzy fallback.
    pub fn find_match(&self, text: &str) -> Option<MatchResult<'_>> {
        let matcher = TriggerMatcher::new();
        matcher
            .find_exact(text, &self.commands)
            .or_else(|| matcher.find_substring(text, &self.commands))
    }

    pub fn find_by_trigger(&self, text: &str) -> Option<&CommandDescriptor> {
        self.find_match(text).map(|m| m.descriptor)
    }

    /// All descriptors in registration order
    pub fn get_all(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    pub fn get(&self, id: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
