//! The run command: load configuration, run one phase, report the outcome

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use is_terminal::IsTerminal;

use deploy_tasks::application::CancelToken;
use deploy_tasks::config;
use deploy_tasks::domain::ports::RunEventSink;
use deploy_tasks::domain::value_objects::Phase;
use deploy_tasks::infrastructure::JsonEventSink;
use deploy_tasks::presentation::factory::{apply_cli_overrides, create_prompter};
use deploy_tasks::presentation::{create_task_runner, exit_code, Cli};

use super::console::ConsoleEventSink;
use super::list::cmd_list;
use crate::ui::ci::report_annotations;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::run::{render_run_header, render_run_summary, RunHeader};

/// Exit status used when a second Ctrl-C aborts the process
const INTERRUPTED: i32 = 130;

/// Run the phase named on the command line; returns the process exit code
pub fn cmd_run(cli: &Cli, ui: &mut UiContext) -> Result<i32> {
    let working_dir = std::env::current_dir()?;
    let loaded = config::discover(cli.config.as_deref(), &working_dir)?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, cli);

    *ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    print_config_warnings(loaded.source.as_deref(), &loaded.warnings, ui);

    let prompter = create_prompter(
        cli.is_non_interactive(),
        std::io::stdin().is_terminal(),
        ui.color,
    );
    let runner = create_task_runner(&config, cli, prompter)?;

    if cli.list {
        return cmd_list(&runner, &cli.phase, ui);
    }

    let phase: Phase = cli.phase.parse()?;

    let json_sink = cli.json.then(|| Arc::new(JsonEventSink::stdout()));
    let events: Arc<dyn RunEventSink> = match &json_sink {
        Some(sink) => sink.clone(),
        None => Arc::new(ConsoleEventSink::new(*ui)),
    };
    let runner = runner.with_events(events);
    install_interrupt_handler(runner.cancel_token());

    if !ui.json {
        let task_count = runner.registry().tasks_for(phase).len();
        print!(
            "{}",
            render_run_header(
                &RunHeader {
                    phase,
                    host: &runner.options().host,
                    target: &runner.target_name(),
                    task_count,
                    dry_run: cli.dry_run,
                },
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }

    let report = runner.run_phase(phase)?;

    match json_sink {
        Some(sink) => sink.report(&report),
        None => {
            println!();
            print!(
                "{}",
                render_run_summary(&report, cli.dry_run, ui.color, ui.unicode)
            );
            if ui.annotate_for_ci() {
                for line in report_annotations(&report) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(exit_code::for_report(&report))
}

/// First Ctrl-C cancels the run after the current task; a second one exits.
fn install_interrupt_handler(cancel: CancelToken) {
    let interrupted = AtomicBool::new(false);
    let result = ctrlc::set_handler(move || {
        if interrupted.swap(true, Ordering::SeqCst) {
            eprintln!("\nInterrupted again, exiting.");
            std::process::exit(INTERRUPTED);
        }
        eprintln!("\nCancelling: remaining tasks will be skipped (Ctrl-C again to abort).");
        cancel.cancel();
    });
    if let Err(e) = result {
        log::warn!("could not install Ctrl-C handler: {}", e);
    }
}
