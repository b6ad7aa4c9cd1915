//! Task entity
//!
//! A task is registered once at startup and outlives individual runs. Its
//! action receives a fresh `ExecutionContext` every time it runs.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::ExecutionContext;
use crate::domain::value_objects::{Phase, TargetHost};

/// The work a task performs.
///
/// Closures of the form `Fn(&ExecutionContext) -> anyhow::Result<()>`
/// implement this trait directly.
pub trait TaskAction: Send + Sync {
    fn run(&self, ctx: &ExecutionContext) -> anyhow::Result<()>;
}

impl<F> TaskAction for F
where
    F: Fn(&ExecutionContext) -> anyhow::Result<()> + Send + Sync,
{
    fn run(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
        self(ctx)
    }
}

/// Operator confirmation required before a task runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    question: String,
    default: Option<bool>,
}

impl Gate {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answer used when nobody can be asked; overrides the runner-wide default
    pub fn default_answer(&self) -> Option<bool> {
        self.default
    }

    /// Question text with `{host}` replaced by the target host
    pub fn question_for(&self, host: &TargetHost) -> String {
        self.question.replace("{host}", host.as_str())
    }
}

/// A named unit of post-deployment work
#[derive(Clone)]
pub struct Task {
    name: String,
    phases: BTreeSet<Phase>,
    gate: Option<Gate>,
    action: Arc<dyn TaskAction>,
}

impl Task {
    /// Create a task bound to no phase yet. A task without phases never runs.
    pub fn new(name: impl Into<String>, action: impl TaskAction + 'static) -> Self {
        Self {
            name: name.into(),
            phases: BTreeSet::new(),
            gate: None,
            action: Arc::new(action),
        }
    }

    /// Bind the task to a phase
    pub fn on(mut self, phase: Phase) -> Self {
        self.phases.insert(phase);
        self
    }

    pub fn on_phases(mut self, phases: impl IntoIterator<Item = Phase>) -> Self {
        self.phases.extend(phases);
        self
    }

    /// Require operator confirmation; `{host}` in the question is substituted
    pub fn confirm(mut self, question: impl Into<String>) -> Self {
        self.gate = Some(Gate::new(question));
        self
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phases(&self) -> &BTreeSet<Phase> {
        &self.phases
    }

    pub fn gate(&self) -> Option<&Gate> {
        self.gate.as_ref()
    }

    pub fn is_gated(&self) -> bool {
        self.gate.is_some()
    }

    pub fn runs_in(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }

    pub fn run(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
        self.action.run(ctx)
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("phases", &self.phases)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
