//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TasksResult;

use super::loader;

/// Root of `deploy-tasks.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra or overridden catalog commands
    #[serde(default)]
    pub commands: BTreeMap<String, CommandSpec>,

    /// Optional features, mapped to the PHP function that signals them
    #[serde(default)]
    pub features: BTreeMap<String, String>,

    /// Task list; empty means the built-in set
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

impl Config {
    /// Load a config file, ignoring unknown-key warnings
    pub fn load(path: &Path) -> TasksResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Per-task timeout, if one is configured
    pub fn task_timeout(&self) -> Option<Duration> {
        self.runner
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Where the WordPress install lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Site URL; the host shown in prompts is taken from it
    #[serde(default)]
    pub url: Option<String>,

    /// ssh destination (`user@host`); unset runs `wp` locally
    #[serde(default)]
    pub ssh: Option<String>,

    /// WordPress root, passed to `wp --path`
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_wp_bin")]
    pub wp_bin: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: None,
            ssh: None,
            path: None,
            wp_bin: default_wp_bin(),
        }
    }
}

fn default_wp_bin() -> String {
    "wp".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Answer to gated tasks in non-interactive mode
    #[serde(default)]
    pub default_answer: Option<bool>,

    /// Per-task timeout in seconds (0 or unset: no limit)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// WP-CLI arguments for a catalog command.
///
/// Accepts either a whitespace separated line or an explicit list:
///   warm-cache = "cache flush"
///   purge-cdn = ["eval", "do_action('purge_cdn');"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    Line(String),
    Argv(Vec<String>),
}

impl CommandSpec {
    pub fn argv(&self) -> Vec<String> {
        match self {
            CommandSpec::Line(line) => line.split_whitespace().map(str::to_string).collect(),
            CommandSpec::Argv(argv) => argv.clone(),
        }
    }
}

/// One `[[tasks]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub name: String,

    /// `sync` and/or `deploy`; validated when the registry is built
    #[serde(default)]
    pub phases: Vec<String>,

    /// Confirmation question; `{host}` is replaced by the target host
    #[serde(default)]
    pub confirm: Option<String>,

    /// Non-interactive answer for this task, overriding `runner.default_answer`
    #[serde(default)]
    pub default: Option<bool>,

    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// One command issued by a configured task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    pub command: String,

    #[serde(default)]
    pub args: BTreeMap<String, String>,

    /// Feature the target must support, otherwise the step is skipped
    #[serde(default)]
    pub requires: Option<String>,

    /// Message reported after the step succeeds
    #[serde(default)]
    pub success: Option<String>,
}
