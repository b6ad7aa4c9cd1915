//! Domain Entities
//!
//! - `Task` - A named, phase-bound unit of maintenance work
//! - `ExecutionContext` - Read-only snapshot handed to task actions
//! - `RunReport` - Ordered outcomes of one run

mod context;
mod report;
mod task;

pub use context::ExecutionContext;
pub use report::{RunReport, RunReportBuilder, TaskResult};
pub use task::{Gate, Task, TaskAction};
