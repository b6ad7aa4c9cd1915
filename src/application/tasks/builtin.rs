//! Built-in task set
//!
//! The standard post-sync/post-deploy maintenance for a WordPress install,
//! used when the configuration defines no tasks of its own.

use crate::domain::entities::Task;
use crate::domain::ports::command_executor::names;
use crate::domain::services::TaskRegistry;
use crate::domain::value_objects::Phase;
use crate::error::TasksResult;

use super::steps::{command_task, CommandStep};

pub const CLEAR_CACHE_QUESTION: &str = "Do you want to clear the cache on '{host}'?";
pub const FLUSH_REWRITES_QUESTION: &str = "Do you want to flush the rewrite rules on '{host}'?";

/// Built-in tasks, in execution order
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        command_task(
            "activate-plugins",
            [CommandStep::new(names::ACTIVATE_ALL_PLUGINS)],
        )
        .on(Phase::Deploy),
        command_task(
            "update-database",
            [CommandStep::new(names::UPDATE_DATABASE_SCHEMA)],
        )
        .on(Phase::Deploy),
        command_task(
            "clear-cache",
            [
                CommandStep::new(names::DELETE_ALL_TRANSIENTS),
                CommandStep::new(names::CLEAR_PAGE_CACHE)
                    .requires(names::FEATURE_PAGE_CACHE)
                    .on_success("Cleared the cache"),
            ],
        )
        .on_phases(Phase::ALL)
        .confirm(CLEAR_CACHE_QUESTION),
        command_task(
            "flush-rewrites",
            [CommandStep::new(names::FLUSH_REWRITE_RULES)],
        )
        .on(Phase::Deploy)
        .confirm(FLUSH_REWRITES_QUESTION),
    ]
}

pub fn builtin_registry() -> TasksResult<TaskRegistry> {
    TaskRegistry::from_tasks(builtin_tasks())
}
