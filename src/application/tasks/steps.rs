//! Step-based task actions
//!
//! Most tasks are a short list of catalogued commands. A `StepAction` runs
//! them in order and stops at the first failure.

use anyhow::Context;

use crate::domain::entities::{ExecutionContext, Task, TaskAction};
use crate::domain::ports::CommandArgs;

/// A single command issued by a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    command: String,
    args: CommandArgs,
    requires: Option<String>,
    success: Option<String>,
}

impl CommandStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: CommandArgs::new(),
            requires: None,
            success: None,
        }
    }

    /// Add a named argument (`--key=value`)
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn with_args(mut self, args: CommandArgs) -> Self {
        self.args.extend(args);
        self
    }

    /// Only run when the target supports `feature`; otherwise the step is skipped
    pub fn requires(mut self, feature: impl Into<String>) -> Self {
        self.requires = Some(feature.into());
        self
    }

    /// Message reported after the step succeeds
    pub fn on_success(mut self, message: impl Into<String>) -> Self {
        self.success = Some(message.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &CommandArgs {
        &self.args
    }

    pub fn required_feature(&self) -> Option<&str> {
        self.requires.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }
}

/// Task action running a sequence of command steps
#[derive(Debug, Clone, Default)]
pub struct StepAction {
    steps: Vec<CommandStep>,
}

impl StepAction {
    pub fn new(steps: impl IntoIterator<Item = CommandStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn steps(&self) -> &[CommandStep] {
        &self.steps
    }
}

impl TaskAction for StepAction {
    fn run(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
        for step in &self.steps {
            if let Some(feature) = step.required_feature() {
                if !ctx.supports(feature) {
                    log::info!(
                        "[{}] skipping '{}': '{}' not available on {}",
                        ctx.task_name(),
                        step.command(),
                        feature,
                        ctx.host()
                    );
                    continue;
                }
            }

            ctx.run_with(step.command(), step.args())
                .with_context(|| format!("step '{}' failed", step.command()))?;

            if let Some(message) = step.success_message() {
                ctx.notice(message);
            }
        }
        Ok(())
    }
}

/// Shorthand for a task whose action is a list of command steps
pub fn command_task(name: impl Into<String>, steps: impl IntoIterator<Item = CommandStep>) -> Task {
    Task::new(name, StepAction::new(steps))
}
