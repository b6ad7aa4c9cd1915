//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TaskRunner` - Runs the registered tasks for a phase (confirm, execute, report)
//!
//! ## Tasks
//!
//! - `StepAction` / `CommandStep` - Tasks made of catalogued commands
//! - `builtin_tasks` - Default post-sync/post-deploy task set

pub mod runner;
pub mod tasks;

pub use runner::{CancelToken, RunOptions, TaskRunner};
pub use tasks::{builtin_registry, builtin_tasks, command_task, CommandStep, StepAction};
