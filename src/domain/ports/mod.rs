//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_executor;
pub mod prompter;
pub mod run_events;

pub use command_executor::{CommandArgs, CommandError, CommandExecutor, CommandOutput};
pub use prompter::Prompter;
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
