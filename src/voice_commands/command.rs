// Executable commands - one resolved invocation, ready to run

use crate::voice_commands::descriptor::{CommandDescriptor, FocusStrategy};
use serde::Serialize;

/// A resolved command carrying everything needed to run it without
/// consulting the registry again
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExecutableCommand {
    /// Registry command acting on the whole desktop
    SystemWide { text: String, descriptor: CommandDescriptor },
    /// Registry command acting on the active window
    ActiveWindow { text: String, descriptor: CommandDescriptor },
    /// Registry command that focuses its target application first
    SpecificApplication { text: String, descriptor: CommandDescriptor },
    /// Launch an application by name
    OpenApplication { text: String, app: String },
    /// Close an application by name
    CloseApplication { text: String, app: String },
    /// Open a file or folder by name
    OpenFile { text: String, name: String, folder: bool },
    /// Action produced by a domain resolver
    Custom {
        text: String,
        resolver: String,
        token: String,
        argument: Option<String>,
    },
}

impl ExecutableCommand {
    /// Build the variant matching the descriptor's focus strategy
    pub fn from_descriptor(text: &str, descriptor: &CommandDescriptor) -> Self {
        let text = text.to_string();
        let descriptor = descriptor.clone();
        match descriptor.focus_strategy {
            FocusStrategy::SystemWide => ExecutableCommand::SystemWide { text, descriptor },
            FocusStrategy::ActiveWindow => ExecutableCommand::ActiveWindow { text, descriptor },
            FocusStrategy::SpecificApplication => {
                ExecutableCommand::SpecificApplication { text, descriptor }
            }
        }
    }

    /// The text this command was resolved from
    pub fn text(&self) -> &str {
        match self {
            ExecutableCommand::SystemWide { text, .. }
            | ExecutableCommand::ActiveWindow { text, .. }
            | ExecutableCommand::SpecificApplication { text, .. }
            | ExecutableCommand::OpenApplication { text, .. }
            | ExecutableCommand::CloseApplication { text, .. }
            | ExecutableCommand::OpenFile { text, .. }
            | ExecutableCommand::Custom { text, .. } => text,
        }
    }

    pub fn descriptor(&self) -> Option<&CommandDescriptor> {
        match self {
            ExecutableCommand::SystemWide { descriptor, .. }
            | ExecutableCommand::ActiveWindow { descriptor, .. }
            | ExecutableCommand::SpecificApplication { descriptor, .. } => Some(descriptor),
            _ => None,
        }
    }

    /// Focus needed before acting; ad-hoc commands need none
    pub fn focus_strategy(&self) -> FocusStrategy {
        match self {
            ExecutableCommand::ActiveWindow { .. } => FocusStrategy::ActiveWindow,
            ExecutableCommand::SpecificApplication { .. } => FocusStrategy::SpecificApplication,
            _ => FocusStrategy::SystemWide,
        }
    }

    /// Stable identifier used in events and logs
    pub fn command_id(&self) -> String {
        match self {
            ExecutableCommand::SystemWide { descriptor, .. }
            | ExecutableCommand::ActiveWindow { descriptor, .. }
            | ExecutableCommand::SpecificApplication { descriptor, .. } => descriptor.id.clone(),
            ExecutableCommand::OpenApplication { .. } => "open_application".to_string(),
            ExecutableCommand::CloseApplication { .. } => "close_application".to_string(),
            ExecutableCommand::OpenFile { folder: true, .. } => "open_folder".to_string(),
            ExecutableCommand::OpenFile { .. } => "open_file".to_string(),
            ExecutableCommand::Custom { resolver, token, .. } => format!("{}:{}", resolver, token),
        }
    }

    /// Short description for user-facing messages
    pub fn label(&self) -> String {
        match self {
            ExecutableCommand::SystemWide { descriptor, .. }
            | ExecutableCommand::ActiveWindow { descriptor, .. }
            | ExecutableCommand::SpecificApplication { descriptor, .. } => {
                descriptor.display_name.clone()
            }
            ExecutableCommand::OpenApplication { app, .. } => format!("Open {}", app),
            ExecutableCommand::CloseApplication { app, .. } => format!("Close {}", app),
            ExecutableCommand::OpenFile { name, .. } => format!("Open {}", name),
            ExecutableCommand::Custom { token, argument, .. } => match argument {
                Some(arg) => format!("{} ({})", token, arg),
                None => token.clone(),
            },
        }
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
