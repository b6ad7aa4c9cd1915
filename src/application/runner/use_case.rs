//! Task Runner
//!
//! Orchestrates one run of a phase:
//! 1. Validate the phase
//! 2. Fetch the phase's tasks from the registry, in registration order
//! 3. Check that non-interactive runs can answer every gate
//! 4. For each task: confirm (if gated), run the action, record the outcome
//! 5. Return the finalized report
//!
//! Task failures never escape: they become `Failed` entries and the run
//! moves on to the next task.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::entities::{ExecutionContext, RunReport, Task, TaskResult};
use crate::domain::ports::{CommandExecutor, NoopEventSink, Prompter, RunEvent, RunEventSink};
use crate::domain::services::TaskRegistry;
use crate::domain::value_objects::{FailureReason, Outcome, Phase, SkipReason};
use crate::error::{TasksError, TasksResult};

use super::cancel::CancelToken;
use super::options::RunOptions;

/// Task runner - executes the registry for a phase
pub struct TaskRunner {
    registry: TaskRegistry,
    executor: Arc<dyn CommandExecutor>,
    prompter: Arc<dyn Prompter>,
    events: Arc<dyn RunEventSink>,
    options: RunOptions,
    cancel: CancelToken,
}

impl TaskRunner {
    pub fn new(
        registry: TaskRegistry,
        executor: Arc<dyn CommandExecutor>,
        prompter: Arc<dyn Prompter>,
        options: RunOptions,
    ) -> Self {
        Self {
            registry,
            executor,
            prompter,
            events: Arc::new(NoopEventSink),
            options,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn RunEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Where commands go, e.g. "local" or "ssh deploy@example.com"
    pub fn target_name(&self) -> String {
        self.executor.display_name()
    }

    /// Handle for requesting cancellation from another thread (e.g. a signal handler)
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Tasks a run of `phase` would consider, without running anything
    pub fn plan(&self, phase: &str) -> TasksResult<Vec<Arc<Task>>> {
        let phase: Phase = phase.parse()?;
        Ok(self.registry.tasks_for(phase))
    }

    /// Run every task registered for `phase`.
    ///
    /// Fails only for an unknown phase or a non-interactive run that cannot
    /// answer a gate. Both are detected before any task runs.
    pub fn run(&self, phase: &str) -> TasksResult<RunReport> {
        let phase: Phase = phase.parse()?;
        self.run_phase(phase)
    }

    pub fn run_phase(&self, phase: Phase) -> TasksResult<RunReport> {
        let tasks = self.registry.tasks_for(phase);
        self.check_gates_answerable(&tasks)?;

        let context = ExecutionContext::new(
            phase,
            self.options.host.clone(),
            !self.prompter.is_interactive(),
            Arc::clone(&self.executor),
            Arc::clone(&self.events),
        );

        log::info!(
            "running {} task(s) for phase '{}' on {}",
            tasks.len(),
            phase,
            self.options.host
        );
        self.events.on_event(RunEvent::Started {
            phase,
            host: self.options.host.clone(),
            task_count: tasks.len(),
        });

        let mut report = RunReport::builder(phase, self.options.host.clone());
        for (index, task) in tasks.iter().enumerate() {
            let started = Instant::now();
            let outcome = self.process(index, task, &context);
            let elapsed = started.elapsed();
            self.emit_outcome(index, task.name(), &outcome, elapsed);
            report.push(TaskResult::new(task.name(), outcome, elapsed));
        }

        let report = report.finish();
        self.events.on_event(RunEvent::Completed {
            succeeded: report.succeeded(),
            skipped: report.skipped(),
            failed: report.failed(),
        });
        Ok(report)
    }

    fn check_gates_answerable(&self, tasks: &[Arc<Task>]) -> TasksResult<()> {
        if self.prompter.is_interactive() {
            return Ok(());
        }
        let unanswerable = tasks
            .iter()
            .find(|task| task.gate().is_some() && self.default_for(task).is_none());
        match unanswerable {
            Some(task) => Err(TasksError::configuration(format!(
                "task '{}' requires confirmation but no default answer is configured \
                 for non-interactive mode",
                task.name()
            ))),
            None => Ok(()),
        }
    }

    fn default_for(&self, task: &Task) -> Option<bool> {
        task.gate()
            .and_then(|gate| gate.default_answer())
            .or(self.options.default_answer)
    }

    fn process(&self, index: usize, task: &Arc<Task>, context: &ExecutionContext) -> Outcome {
        if self.cancel.is_cancelled() {
            log::debug!("[{}] skipped: run cancelled", task.name());
            return Outcome::skipped(SkipReason::Cancelled);
        }

        if let Some(gate) = task.gate() {
            let question = gate.question_for(&self.options.host);
            let confirmed = match self.prompter.confirm(&question, self.default_for(task)) {
                Ok(answer) => answer,
                Err(e) => {
                    log::warn!("[{}] could not confirm, treating as no: {}", task.name(), e);
                    false
                }
            };
            // The operator may have interrupted while the prompt was open;
            // whatever the prompt returned then is not a real answer.
            if self.cancel.is_cancelled() {
                log::debug!("[{}] skipped: run cancelled while prompting", task.name());
                return Outcome::skipped(SkipReason::Cancelled);
            }
            if !confirmed {
                log::debug!("[{}] declined", task.name());
                return Outcome::skipped(SkipReason::Declined);
            }
        }

        self.events.on_event(RunEvent::TaskStarted {
            index,
            name: task.name().to_string(),
        });
        let task_context = context.for_task(task.name());
        match self.options.task_timeout {
            Some(limit) => run_with_timeout(task, task_context, limit),
            None => run_contained(task, &task_context),
        }
    }

    fn emit_outcome(&self, index: usize, name: &str, outcome: &Outcome, elapsed: Duration) {
        let name = name.to_string();
        let event = match outcome {
            Outcome::Skipped { reason } => RunEvent::TaskSkipped {
                index,
                name,
                reason: *reason,
            },
            Outcome::Succeeded => RunEvent::TaskSucceeded {
                index,
                name,
                duration_ms: elapsed.as_millis() as u64,
            },
            Outcome::Failed { reason } => {
                log::warn!("[{}] failed: {}", name, reason);
                RunEvent::TaskFailed {
                    index,
                    name,
                    reason: reason.clone(),
                }
            }
        };
        self.events.on_event(event);
    }
}

/// Run the action on the current thread, turning errors and panics into outcomes
fn run_contained(task: &Task, context: &ExecutionContext) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| task.run(context)));
    outcome_of(result)
}

/// Run the action on a worker thread and stop waiting after `limit`.
///
/// A timed-out worker is detached, not killed. Its context is abandoned, so
/// a command already in flight may finish but no further command is issued
/// and nothing more reaches the event sink. Its late result is discarded.
fn run_with_timeout(task: &Arc<Task>, context: ExecutionContext, limit: Duration) -> Outcome {
    let (tx, rx) = mpsc::channel();
    let handle = context.clone();
    let worker_task = Arc::clone(task);
    let spawned = thread::Builder::new()
        .name(format!("task-{}", task.name()))
        .spawn(move || {
            let outcome = run_contained(&worker_task, &context);
            let _ = tx.send(outcome);
        });

    if let Err(e) = spawned {
        return Outcome::failed(FailureReason::Error {
            message: format!("could not start task thread: {}", e),
        });
    }

    match rx.recv_timeout(limit) {
        Ok(outcome) => outcome,
        Err(RecvTimeoutError::Timeout) => {
            handle.abandon();
            log::warn!("[{}] abandoned after {:?}", task.name(), limit);
            Outcome::failed(FailureReason::Timeout { limit })
        }
        Err(RecvTimeoutError::Disconnected) => Outcome::failed(FailureReason::Panicked {
            message: "task thread exited without a result".to_string(),
        }),
    }
}

fn outcome_of(result: Result<anyhow::Result<()>, Box<dyn Any + Send>>) -> Outcome {
    match result {
        Ok(Ok(())) => Outcome::Succeeded,
        Ok(Err(e)) => Outcome::failed(FailureReason::Error {
            message: format!("{:#}", e),
        }),
        Err(payload) => Outcome::failed(FailureReason::Panicked {
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
