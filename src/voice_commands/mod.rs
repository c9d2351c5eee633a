// Voice commands module - command matching and execution

pub mod actions;
pub mod command;
pub mod dedup;
pub mod defaults;
pub mod descriptor;
pub mod executor;
pub mod matcher;
pub mod registry;
pub mod resolver;

pub use command::ExecutableCommand;
pub use descriptor::{ActionSpec, CommandDescriptor, FocusStrategy};
pub use executor::{CommandExecutor, ExecutionError, ExecutionReport};
pub use registry::{CommandRegistry, RegistryError};
pub use resolver::{ChainOutcome, Resolution, ResolutionStage, ResolverChain};
