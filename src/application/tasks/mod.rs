//! Task definitions
//!
//! - `steps` - tasks built from catalogued command steps
//! - `builtin` - the default task set

pub mod builtin;
pub mod steps;

pub use builtin::{builtin_registry, builtin_tasks};
pub use steps::{command_task, CommandStep, StepAction};
