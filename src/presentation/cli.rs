//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The phase is taken as a raw string so that an unknown phase is reported
//!   by the runner (with its own exit code) rather than as a usage error
//! - `--yes` and `--non-interactive` both suppress prompts; only `--yes`
//!   falls back to answering "yes"

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// deploy-tasks - run post-sync/post-deploy maintenance on a WordPress install
#[derive(Parser, Debug)]
#[command(name = "deploy-tasks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Phases:\n  sync     after the database/files were synced\n  deploy   after code was deployed")]
pub struct Cli {
    /// Phase to run (sync or deploy)
    #[arg(value_name = "PHASE")]
    pub phase: String,

    /// Skip prompts, answering with the configured default (or yes)
    #[arg(short, long)]
    pub yes: bool,

    /// Skip prompts, answering only with a configured default
    #[arg(long)]
    pub non_interactive: bool,

    /// Default answer for gated tasks in non-interactive mode
    #[arg(long, value_name = "y|n", value_parser = parse_answer_arg)]
    pub default_answer: Option<bool>,

    /// Configuration file (default: ./deploy-tasks.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Site URL (the host is shown in prompts)
    #[arg(long)]
    pub url: Option<String>,

    /// Run WP-CLI over ssh (user@host)
    #[arg(long, value_name = "DEST")]
    pub ssh: Option<String>,

    /// WordPress root passed to WP-CLI as --path
    #[arg(long, value_name = "DIR")]
    pub path: Option<String>,

    /// Per-task timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show the commands that would run without touching the target
    #[arg(long)]
    pub dry_run: bool,

    /// List the tasks for the phase and exit
    #[arg(long)]
    pub list: bool,

    /// Output format for CI (NDJSON events)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether prompts are suppressed
    pub fn is_non_interactive(&self) -> bool {
        self.yes || self.non_interactive
    }

    /// Log level filter for `-v` flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn parse_answer_arg(raw: &str) -> Result<bool, String> {
    crate::config::parse_answer(raw).ok_or_else(|| format!("expected y or n, got '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn phase_is_required() {
        assert!(Cli::try_parse_from(["deploy-tasks"]).is_err());
    }

    #[test]
    fn phase_is_not_validated_by_clap() {
        let cli = Cli::try_parse_from(["deploy-tasks", "rollback"]).unwrap();
        assert_eq!(cli.phase, "rollback");
    }

    #[test]
    fn parses_yes_and_verbosity() {
        let cli = Cli::try_parse_from(["deploy-tasks", "deploy", "-y", "-vv"]).unwrap();
        assert!(cli.yes);
        assert!(cli.is_non_interactive());
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn parses_default_answer() {
        let cli = Cli::try_parse_from([
            "deploy-tasks",
            "sync",
            "--non-interactive",
            "--default-answer",
            "n",
        ])
        .unwrap();
        assert!(cli.is_non_interactive());
        assert_eq!(cli.default_answer, Some(false));

        assert!(Cli::try_parse_from(["deploy-tasks", "sync", "--default-answer", "maybe"]).is_err());
    }

    #[test]
    fn parses_target_flags() {
        let cli = Cli::try_parse_from([
            "deploy-tasks",
            "deploy",
            "--url",
            "https://example.com",
            "--ssh",
            "deploy@example.com",
            "--path",
            "/var/www/html",
            "--timeout",
            "30",
            "--dry-run",
            "--json",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.ssh.as_deref(), Some("deploy@example.com"));
        assert_eq!(cli.path.as_deref(), Some("/var/www/html"));
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.dry_run);
        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert!(!cli.is_non_interactive());
    }
}
