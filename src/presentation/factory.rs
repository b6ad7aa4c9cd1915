//! Runner Factory
//!
//! Creates the task runner with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;
use std::time::Duration;

use crate::application::{RunOptions, TaskRunner};
use crate::config::Config;
use crate::domain::ports::{CommandExecutor, Prompter};
use crate::error::TasksResult;
use crate::infrastructure::{
    DryRunExecutor, FixedPrompter, LinePrompter, TerminalPrompter, WpCliExecutor,
};

use super::cli::Cli;

/// Apply CLI flags on top of file and environment configuration
pub fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.target.url = Some(url.clone());
    }
    if let Some(ssh) = &cli.ssh {
        config.target.ssh = Some(ssh.clone());
    }
    if let Some(path) = &cli.path {
        config.target.path = Some(path.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.runner.timeout_secs = Some(timeout);
    }
    if let Some(answer) = cli.default_answer {
        config.runner.default_answer = Some(answer);
    }
}

/// Create the executor described by the target configuration
pub fn create_executor(config: &Config, dry_run: bool) -> Arc<dyn CommandExecutor> {
    let catalog = config.catalog();
    if dry_run {
        return Arc::new(DryRunExecutor::new(catalog));
    }

    let executor = match &config.target.ssh {
        Some(destination) => WpCliExecutor::ssh(destination.clone(), catalog),
        None => WpCliExecutor::local(catalog),
    }
    .with_wp_bin(config.target.wp_bin.clone());

    match &config.target.path {
        Some(path) => Arc::new(executor.with_path(path.clone())),
        None => Arc::new(executor),
    }
}

/// Pick the prompter for this invocation
///
/// - Prompts suppressed: `FixedPrompter`
/// - stdin is a terminal: `TerminalPrompter`
/// - Otherwise (pipes): `LinePrompter` on stdin/stderr
pub fn create_prompter(
    non_interactive: bool,
    stdin_is_terminal: bool,
    color: bool,
) -> Arc<dyn Prompter> {
    if non_interactive {
        Arc::new(FixedPrompter)
    } else if stdin_is_terminal {
        Arc::new(TerminalPrompter::new(color))
    } else {
        Arc::new(LinePrompter::stdio())
    }
}

/// Default answer for gated tasks.
///
/// `--yes` falls back to "yes" when nothing is configured; every other mode
/// uses only what was configured.
pub fn default_answer(config: &Config, cli: &Cli) -> Option<bool> {
    match config.runner.default_answer {
        Some(answer) => Some(answer),
        None if cli.yes => Some(true),
        None => None,
    }
}

pub fn run_options(config: &Config, cli: &Cli) -> TasksResult<RunOptions> {
    Ok(RunOptions::new(config.host()?)
        .with_default_answer(default_answer(config, cli))
        .with_task_timeout(config.task_timeout()))
}

/// Create a task runner from configuration (CLI overrides already applied)
pub fn create_task_runner(
    config: &Config,
    cli: &Cli,
    prompter: Arc<dyn Prompter>,
) -> TasksResult<TaskRunner> {
    let registry = config.registry()?;
    let options = run_options(config, cli)?;
    let executor = create_executor(config, cli.dry_run);

    log::debug!(
        "runner: {} task(s), executor {}, timeout {:?}",
        registry.len(),
        executor.display_name(),
        options.task_timeout.map(|t: Duration| t.as_secs())
    );
    Ok(TaskRunner::new(registry, executor, prompter, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("deploy-tasks").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = Config::default();
        config.target.url = Some("https://file.example.com".to_string());
        config.runner.timeout_secs = Some(10);

        apply_cli_overrides(
            &mut config,
            &cli(&["deploy", "--url", "https://cli.example.com", "--timeout", "5"]),
        );

        assert_eq!(config.target.url.as_deref(), Some("https://cli.example.com"));
        assert_eq!(config.runner.timeout_secs, Some(5));
    }

    #[test]
    fn yes_defaults_to_true_without_configured_answer() {
        let config = Config::default();
        assert_eq!(default_answer(&config, &cli(&["deploy", "--yes"])), Some(true));
        assert_eq!(default_answer(&config, &cli(&["deploy", "--non-interactive"])), None);
    }

    #[test]
    fn yes_respects_configured_answer() {
        let mut config = Config::default();
        config.runner.default_answer = Some(false);
        assert_eq!(default_answer(&config, &cli(&["deploy", "--yes"])), Some(false));
    }

    #[test]
    fn prompter_follows_mode() {
        assert!(!create_prompter(true, true, false).is_interactive());
        assert!(create_prompter(false, true, false).is_interactive());
        assert!(create_prompter(false, false, false).is_interactive());
    }

    #[test]
    fn executor_follows_target() {
        let mut config = Config::default();
        assert_eq!(create_executor(&config, false).display_name(), "local");
        assert_eq!(create_executor(&config, true).display_name(), "dry run");

        config.target.ssh = Some("deploy@example.com".to_string());
        assert_eq!(
            create_executor(&config, false).display_name(),
            "ssh deploy@example.com"
        );
    }

    #[test]
    fn runner_uses_host_from_config() {
        let mut config = Config::default();
        config.target.url = Some("https://www.example.com".to_string());
        let args = cli(&["deploy", "--yes", "--dry-run"]);

        let runner = create_task_runner(&config, &args, Arc::new(FixedPrompter)).unwrap();

        assert_eq!(runner.options().host.as_str(), "www.example.com");
        assert_eq!(runner.options().default_answer, Some(true));
        assert_eq!(runner.registry().len(), 4);
    }

    #[test]
    fn dry_run_with_yes_runs_builtin_tasks() {
        let config = Config::default();
        let args = cli(&["deploy", "--yes", "--dry-run"]);
        let runner = create_task_runner(&config, &args, Arc::new(FixedPrompter)).unwrap();

        let report = runner.run(&args.phase).unwrap();

        assert_eq!(report.len(), 4);
        assert!(report.is_success());
    }
}
