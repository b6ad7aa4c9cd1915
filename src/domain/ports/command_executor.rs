//! Command Executor Port
//!
//! Abstracts the management interface of the target install (WP-CLI locally
//! or over ssh). Tasks only ever talk to the target through this trait.

use std::collections::BTreeMap;
use thiserror::Error;

/// Command and feature names every executor is expected to understand
pub mod names {
    pub const ACTIVATE_ALL_PLUGINS: &str = "activate-all-plugins";
    pub const UPDATE_DATABASE_SCHEMA: &str = "update-database-schema";
    pub const DELETE_ALL_TRANSIENTS: &str = "delete-all-transients";
    pub const CLEAR_PAGE_CACHE: &str = "clear-page-cache";
    pub const FLUSH_REWRITE_RULES: &str = "flush-rewrite-rules";

    /// Optional page cache integration (e.g. WP Super Cache)
    pub const FEATURE_PAGE_CACHE: &str = "page-cache";
}

/// Named arguments for a command, rendered in key order
pub type CommandArgs = BTreeMap<String, String>;

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Error returned by a command executor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The management interface could not be reached at all
    #[error("target unreachable: {0}")]
    Unreachable(String),

    /// The command is not known to the executor
    #[error("unrecognized command '{0}'")]
    Unrecognized(String),

    /// The command ran but reported failure
    #[error("'{command}' failed ({}): {stderr}", exit_label(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The runner stopped waiting for the task that issued the command
    #[error("task '{0}' was abandoned after exceeding its time limit")]
    Abandoned(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Trait for executing administrative commands on the target.
///
/// Implementations can be:
/// - `WpCliExecutor`: runs WP-CLI locally or over ssh
/// - `DryRunExecutor`: logs commands without running them
pub trait CommandExecutor: Send + Sync {
    /// Run a single named command.
    ///
    /// Side effects on the target are real and not necessarily idempotent.
    fn execute(&self, command: &str, args: &CommandArgs) -> Result<CommandOutput, CommandError>;

    /// Check whether an optional integration is available on the target.
    ///
    /// Absence is not an error; executors answer `false` when unsure.
    fn supports(&self, feature: &str) -> bool;

    /// Human readable description of where commands go
    fn display_name(&self) -> String;
}
