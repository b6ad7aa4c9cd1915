//! deploy-tasks CLI - post-sync/post-deploy maintenance for WordPress
//!
//! Usage: deploy-tasks <PHASE> [OPTIONS]
//!
//! Phases:
//!   sync    after the database and uploads were synced to the target
//!   deploy  after new code was deployed to the target
//!
//! Exit codes:
//!   0  every task succeeded or was declined
//!   1  at least one task failed
//!   2  unknown phase
//!   3  configuration error
//!   4  anything else

use clap::Parser;

use deploy_tasks::config::Config;
use deploy_tasks::presentation::{exit_code, Cli};

mod commands;
mod ui;

use ui::context::UiContext;
use ui::error::print_error;

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    // Replaced once the configuration is loaded; used for early errors.
    let mut ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());

    let code = match commands::run::cmd_run(&cli, &mut ui) {
        Ok(code) => code,
        Err(err) => {
            log::debug!("run aborted: {:?}", err);
            print_error(&err, &ui);
            exit_code::for_error(&err)
        }
    };

    std::process::exit(code);
}
