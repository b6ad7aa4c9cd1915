//! deploy-tasks - post-sync and post-deploy maintenance for WordPress
//!
//! After a site has been synced or deployed, a fixed set of WP-CLI chores
//! usually follows: activate plugins, run database upgrades, clear caches,
//! flush rewrite rules. This crate runs those chores as an ordered list of
//! tasks, asking the operator before the disruptive ones and reporting each
//! task's outcome without letting one failure stop the rest.
//!
//! ## Layers
//!
//! - `domain` - tasks, phases, outcomes, the registry, and the ports
//! - `application` - the runner and the built-in tasks
//! - `infrastructure` - WP-CLI executors, prompters, the NDJSON sink
//! - `config` - TOML configuration and environment overrides
//! - `presentation` - CLI definition, wiring, exit codes

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{builtin_registry, builtin_tasks, CancelToken, RunOptions, TaskRunner};
pub use config::Config;
pub use domain::entities::{ExecutionContext, Gate, RunReport, Task, TaskAction, TaskResult};
pub use domain::services::TaskRegistry;
pub use domain::value_objects::{FailureReason, Outcome, Phase, SkipReason, TargetHost};
pub use error::{TasksError, TasksResult};
