use std::sync::Arc;

use deploy_tasks::domain::entities::Task;
use deploy_tasks::domain::value_objects::{Phase, TargetHost};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::run::phase_icon;

fn answer_label(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "y",
        Some(false) => "n",
        None => "none",
    }
}

/// `--list` output: tasks in run order, with the question each one asks
pub fn render_plan(
    phase: Phase,
    host: &TargetHost,
    tasks: &[Arc<Task>],
    default_answer: Option<bool>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = ColoredText::info(format!("Tasks for '{}' on {}", phase, host))
        .bold()
        .render(supports_color);
    let mut out = format!(
        "{} {}\n",
        phase_icon(phase).colored(supports_color, supports_unicode),
        title
    );

    if tasks.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("(no tasks registered)").render(supports_color)
        ));
        return out;
    }

    for (index, task) in tasks.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, task.name()));
        if let Some(gate) = task.gate() {
            let default = gate.default_answer().or(default_answer);
            out.push_str(&format!(
                "     {} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                gate.question_for(host),
                ColoredText::dim(format!("[default: {}]", answer_label(default)))
                    .render(supports_color)
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploy_tasks::application::builtin_tasks;

    fn deploy_tasks_for(phase: Phase) -> Vec<Arc<Task>> {
        builtin_tasks()
            .into_iter()
            .filter(|t| t.runs_in(phase))
            .map(Arc::new)
            .collect()
    }

    #[test]
    fn lists_tasks_in_order_with_questions() {
        let host = TargetHost::new("example.com");
        let rendered = render_plan(
            Phase::Deploy,
            &host,
            &deploy_tasks_for(Phase::Deploy),
            None,
            false,
            false,
        );

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "[DEPLOY] Tasks for 'deploy' on example.com");
        assert_eq!(lines[1], "  1. activate-plugins");
        assert_eq!(lines[2], "  2. update-database");
        assert_eq!(lines[3], "  3. clear-cache");
        assert!(lines[4].contains("Do you want to clear the cache on 'example.com'?"));
        assert!(lines[4].ends_with("[default: none]"));
    }

    #[test]
    fn shows_runner_default_answer() {
        let host = TargetHost::new("example.com");
        let rendered = render_plan(
            Phase::Sync,
            &host,
            &deploy_tasks_for(Phase::Sync),
            Some(false),
            false,
            false,
        );
        assert!(rendered.contains("1. clear-cache"));
        assert!(rendered.contains("[default: n]"));
        assert!(!rendered.contains("flush-rewrites"));
    }

    #[test]
    fn empty_plan_says_so() {
        let rendered = render_plan(
            Phase::Sync,
            &TargetHost::localhost(),
            &[],
            None,
            false,
            true,
        );
        assert!(rendered.contains("(no tasks registered)"));
    }
}
