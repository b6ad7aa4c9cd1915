//! Run Options
//!
//! Configuration types for task runs.

use std::time::Duration;

use crate::domain::value_objects::TargetHost;

/// Options for the task runner
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Host shown in prompts and reports
    pub host: TargetHost,
    /// Answer for gated tasks when nobody can be asked
    pub default_answer: Option<bool>,
    /// Per-task limit; `None` waits indefinitely
    pub task_timeout: Option<Duration>,
}

impl RunOptions {
    pub fn new(host: TargetHost) -> Self {
        Self {
            host,
            default_answer: None,
            task_timeout: None,
        }
    }

    pub fn with_default_answer(mut self, answer: Option<bool>) -> Self {
        self.default_answer = answer;
        self
    }

    pub fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(TargetHost::localhost())
    }
}
