use deploy_tasks::error::TasksError;
use deploy_tasks::infrastructure::JsonEventSink;
use deploy_tasks::presentation::exit_code;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Render a startup error as a boxed block
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<TasksError>() {
        Some(tasks) => tasks_error_block(tasks),
        None => ErrorBlock::new(chain_message(err)),
    }
    .render(supports_color, supports_unicode)
}

fn tasks_error_block(err: &TasksError) -> ErrorBlock {
    match err {
        TasksError::InvalidPhase { .. } => ErrorBlock::new(err.to_string())
            .at("command line")
            .with_fix("Run `deploy-tasks sync` or `deploy-tasks deploy`."),
        TasksError::InvalidConfig { file, message } => ErrorBlock::new(message.clone())
            .at(file.display().to_string())
            .with_fix("Fix the TOML above and try again."),
        TasksError::DuplicateTask { .. } => ErrorBlock::new(err.to_string())
            .at("configuration")
            .with_fix("Give every [[tasks]] entry a unique name."),
        TasksError::Configuration { message } if message.contains("default answer") => {
            ErrorBlock::new(err.to_string())
                .at("configuration")
                .with_fix("Pass --default-answer y|n, set runner.default_answer, or use --yes.")
        }
        TasksError::Configuration { .. } => ErrorBlock::new(err.to_string()).at("configuration"),
        TasksError::Io(_) => ErrorBlock::new(err.to_string()),
    }
}

fn chain_message(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n  caused by: ")
}

/// Report a startup error on the channel the invocation asked for
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        JsonEventSink::stdout().error(&chain_message(err), exit_code::for_error(err));
        return;
    }

    if ui.annotate_for_ci() {
        println!(
            "{}",
            crate::ui::ci::github_actions_annotation(
                crate::ui::ci::AnnotationLevel::Error,
                &err.to_string(),
                Some("deploy-tasks"),
            )
        );
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
