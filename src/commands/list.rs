use anyhow::Result;

use deploy_tasks::application::TaskRunner;
use deploy_tasks::domain::value_objects::Phase;
use deploy_tasks::presentation::exit_code;

use crate::ui::context::UiContext;
use crate::ui::views::plan::render_plan;

/// `--list`: show what a run of `phase` would consider, without running it
pub fn cmd_list(runner: &TaskRunner, phase: &str, ui: &UiContext) -> Result<i32> {
    let tasks = runner.plan(phase)?;
    let options = runner.options();

    if ui.json {
        let items: Vec<serde_json::Value> = tasks
            .iter()
            .map(|task| {
                serde_json::json!({
                    "name": task.name(),
                    "question": task.gate().map(|g| g.question_for(&options.host)),
                    "default": task
                        .gate()
                        .and_then(|g| g.default_answer().or(options.default_answer)),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "plan",
                "phase": phase,
                "host": options.host,
                "tasks": items,
            })
        );
        return Ok(exit_code::SUCCESS);
    }

    let phase: Phase = phase.parse()?;
    print!(
        "{}",
        render_plan(
            phase,
            &options.host,
            &tasks,
            options.default_answer,
            ui.color,
            ui.unicode
        )
    );
    Ok(exit_code::SUCCESS)
}
