//! Configuration module for deploy-tasks
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOY_TASKS_*)
//! 3. Explicit `--config` file, else `./deploy-tasks.toml`
//! 4. User config (~/.config/deploy-tasks/config.toml)
//! 5. Built-in defaults (lowest priority)

mod build;
mod loader;
mod types;

pub use loader::{
    apply_overrides, candidate_paths, discover, load_with_warnings, parse_answer,
    with_env_overrides, ConfigWarning, LoadedConfig, ENV_PREFIX, PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, CommandSpec, Config, OutputConfig, RunnerConfig, StepConfig, TargetConfig,
    TaskConfig,
};
