//! Execution context handed to task actions
//!
//! Created by the runner for one run and dropped afterwards. Cloning is
//! cheap; the executor and event sink are shared handles.
//!
//! Each task gets its own context from `for_task`. Once the runner abandons
//! it (the task exceeded its time limit), the context issues no further
//! commands and emits no further events.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{
    CommandArgs, CommandError, CommandExecutor, CommandOutput, RunEvent, RunEventSink,
};
use crate::domain::value_objects::{Phase, TargetHost};

#[derive(Clone)]
pub struct ExecutionContext {
    phase: Phase,
    host: TargetHost,
    non_interactive: bool,
    executor: Arc<dyn CommandExecutor>,
    events: Arc<dyn RunEventSink>,
    task: Option<String>,
    abandoned: Arc<Mutex<bool>>,
}

impl ExecutionContext {
    pub fn new(
        phase: Phase,
        host: TargetHost,
        non_interactive: bool,
        executor: Arc<dyn CommandExecutor>,
        events: Arc<dyn RunEventSink>,
    ) -> Self {
        Self {
            phase,
            host,
            non_interactive,
            executor,
            events,
            task: None,
            abandoned: Arc::new(Mutex::new(false)),
        }
    }

    /// Copy of this context attributed to a specific task
    pub fn for_task(&self, name: &str) -> Self {
        Self {
            task: Some(name.to_string()),
            abandoned: Arc::new(Mutex::new(false)),
            ..self.clone()
        }
    }

    /// Detach this task from the run. Returns once no event from the task
    /// can reach the sink anymore.
    pub fn abandon(&self) {
        *self.abandoned_flag() = true;
    }

    pub fn is_abandoned(&self) -> bool {
        *self.abandoned_flag()
    }

    fn abandoned_flag(&self) -> MutexGuard<'_, bool> {
        self.abandoned.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emit `event` unless the task was abandoned. The flag stays locked
    /// while the sink runs, so `abandon` cannot slip in between.
    fn emit(&self, event: RunEvent) -> bool {
        let abandoned = self.abandoned_flag();
        if *abandoned {
            return false;
        }
        self.events.on_event(event);
        true
    }

    fn abandoned_error(&self) -> CommandError {
        CommandError::Abandoned(self.task_name().to_string())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn host(&self) -> &TargetHost {
        &self.host
    }

    pub fn is_non_interactive(&self) -> bool {
        self.non_interactive
    }

    pub fn task_name(&self) -> &str {
        self.task.as_deref().unwrap_or("-")
    }

    /// Run a command without arguments
    pub fn run(&self, command: &str) -> Result<CommandOutput, CommandError> {
        self.run_with(command, &CommandArgs::new())
    }

    /// Run a command through the executor and report its output
    pub fn run_with(
        &self,
        command: &str,
        args: &CommandArgs,
    ) -> Result<CommandOutput, CommandError> {
        log::debug!(
            "[{}] executing '{}' on {} ({} args)",
            self.task_name(),
            command,
            self.host,
            args.len()
        );
        if self.is_abandoned() {
            return Err(self.abandoned_error());
        }
        let output = self.executor.execute(command, args)?;

        let attached = if self.events.wants_detailed_events() {
            self.emit(RunEvent::CommandCompleted {
                task: self.task_name().to_string(),
                command: command.to_string(),
                output: output.stdout.clone(),
            })
        } else {
            !self.is_abandoned()
        };
        if !attached {
            log::debug!(
                "[{}] '{}' finished after the task was abandoned",
                self.task_name(),
                command
            );
            return Err(self.abandoned_error());
        }
        Ok(output)
    }

    /// Probe an optional integration on the target
    ///
    /// An abandoned task probes nothing and sees every feature as absent.
    pub fn supports(&self, feature: &str) -> bool {
        if self.is_abandoned() {
            return false;
        }
        let supported = self.executor.supports(feature);
        log::debug!(
            "[{}] feature '{}' supported: {}",
            self.task_name(),
            feature,
            supported
        );
        supported
    }

    /// Report a message on behalf of the current task
    pub fn notice(&self, message: impl Into<String>) {
        self.emit(RunEvent::Notice {
            task: self.task_name().to_string(),
            message: message.into(),
        });
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("phase", &self.phase)
            .field("host", &self.host)
            .field("non_interactive", &self.non_interactive)
            .field("executor", &self.executor.display_name())
            .field("task", &self.task)
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}
