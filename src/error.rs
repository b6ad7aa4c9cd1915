//! Error types for deploy-tasks
//!
//! Uses `thiserror` for library errors. Only startup and configuration
//! problems are errors; anything a task does wrong ends up in the run report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy-tasks operations
pub type TasksResult<T> = Result<T, TasksError>;

/// Main error type for deploy-tasks operations
#[derive(Error, Debug)]
pub enum TasksError {
    /// Phase is not one of the recognized values
    #[error("invalid phase '{value}': expected 'sync' or 'deploy'")]
    InvalidPhase { value: String },

    /// Two tasks registered under the same name
    #[error("task '{name}' is already registered")]
    DuplicateTask { name: String },

    /// Runner is misconfigured (e.g. non-interactive without a default answer)
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TasksError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error stems from configuration rather than the environment.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTask { .. } | Self::Configuration { .. } | Self::InvalidConfig { .. }
        )
    }
}
