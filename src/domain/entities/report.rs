//! Run report entity
//!
//! One `TaskResult` per eligible task, in execution order. The builder is
//! only reachable by the runner while a run is in progress; once finished
//! the report is read-only.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

use crate::domain::value_objects::{Outcome, Phase, TargetHost};

/// Outcome of one task in one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResult {
    task: String,
    #[serde(flatten)]
    outcome: Outcome,
    duration_ms: u64,
}

impl TaskResult {
    pub fn new(task: impl Into<String>, outcome: Outcome, duration: Duration) -> Self {
        Self {
            task: task.into(),
            outcome,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Finalized record of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    phase: Phase,
    host: TargetHost,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    results: Vec<TaskResult>,
}

impl RunReport {
    pub fn builder(phase: Phase, host: TargetHost) -> RunReportBuilder {
        RunReportBuilder {
            phase,
            host,
            started_at: Utc::now(),
            results: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn host(&self) -> &TargetHost {
        &self.host
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, task: &str) -> Option<&TaskResult> {
        self.results.iter().find(|r| r.task == task)
    }

    pub fn succeeded(&self) -> usize {
        self.count(Outcome::is_succeeded)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::is_skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TaskResult> {
        self.results.iter().filter(|r| r.outcome.is_failed())
    }

    /// A run is successful when no task failed. Skips don't count against it.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// In-progress report, appended to as tasks complete
#[derive(Debug)]
pub struct RunReportBuilder {
    phase: Phase,
    host: TargetHost,
    started_at: DateTime<Utc>,
    results: Vec<TaskResult>,
}

impl RunReportBuilder {
    pub fn push(&mut self, result: TaskResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            phase: self.phase,
            host: self.host,
            started_at: self.started_at,
            finished_at: Utc::now(),
            results: self.results,
        }
    }
}
