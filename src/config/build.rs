//! Turning configuration into runtime objects
//!
//! Everything here runs at startup. Mistakes (unknown phases, unknown
//! commands, duplicate names) are configuration errors, never run failures.

use crate::application::tasks::{builtin_tasks, command_task, CommandStep};
use crate::domain::entities::{Gate, Task};
use crate::domain::services::TaskRegistry;
use crate::domain::value_objects::{Phase, TargetHost};
use crate::error::{TasksError, TasksResult};
use crate::infrastructure::executor::CommandCatalog;

use super::types::{Config, TaskConfig};

impl Config {
    /// Built-in catalog extended with `[commands]` and `[features]`
    pub fn catalog(&self) -> CommandCatalog {
        let mut catalog = CommandCatalog::builtin();
        for (name, spec) in &self.commands {
            catalog.define(name.clone(), spec.argv());
        }
        for (name, function) in &self.features {
            catalog.define_feature(name.clone(), function.clone());
        }
        catalog
    }

    /// Host shown in prompts: from the site URL, else the ssh destination
    pub fn host(&self) -> TasksResult<TargetHost> {
        if let Some(url) = &self.target.url {
            return TargetHost::from_url(url);
        }
        if let Some(ssh) = &self.target.ssh {
            return Ok(TargetHost::from_ssh_destination(ssh));
        }
        Ok(TargetHost::localhost())
    }

    /// Configured tasks, or the built-in set when none are configured
    pub fn tasks(&self) -> TasksResult<Vec<Task>> {
        if self.tasks.is_empty() {
            return Ok(builtin_tasks());
        }
        let catalog = self.catalog();
        self.tasks
            .iter()
            .map(|task| build_task(task, &catalog))
            .collect()
    }

    pub fn registry(&self) -> TasksResult<TaskRegistry> {
        TaskRegistry::from_tasks(self.tasks()?)
    }
}

fn build_task(config: &TaskConfig, catalog: &CommandCatalog) -> TasksResult<Task> {
    let invalid = |message: String| {
        TasksError::configuration(format!("task '{}': {}", config.name, message))
    };

    if config.name.trim().is_empty() {
        return Err(TasksError::configuration("task name must not be empty"));
    }

    let phases = config
        .phases
        .iter()
        .map(|raw| raw.parse::<Phase>().map_err(|e| invalid(e.to_string())))
        .collect::<TasksResult<Vec<_>>>()?;
    if phases.is_empty() {
        log::warn!("task '{}' has no phases and will never run", config.name);
    }

    let mut steps = Vec::with_capacity(config.steps.len());
    for step in &config.steps {
        if !catalog.contains(&step.command) {
            return Err(invalid(format!("unknown command '{}'", step.command)));
        }
        let mut built = CommandStep::new(&step.command).with_args(step.args.clone());
        if let Some(feature) = &step.requires {
            if !catalog.has_feature(feature) {
                return Err(invalid(format!("unknown feature '{}'", feature)));
            }
            built = built.requires(feature);
        }
        if let Some(message) = &step.success {
            built = built.on_success(message);
        }
        steps.push(built);
    }

    let mut task = command_task(&config.name, steps).on_phases(phases);
    match (&config.confirm, config.default) {
        (Some(question), default) => {
            let gate = Gate::new(question);
            task = task.with_gate(match default {
                Some(answer) => gate.with_default(answer),
                None => gate,
            });
        }
        (None, Some(_)) => {
            log::warn!(
                "task '{}' sets a default answer but has no confirm question",
                config.name
            );
        }
        (None, None) => {}
    }
    Ok(task)
}
