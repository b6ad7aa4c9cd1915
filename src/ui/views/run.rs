use deploy_tasks::domain::entities::RunReport;
use deploy_tasks::domain::value_objects::{Outcome, Phase, TargetHost};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn phase_icon(phase: Phase) -> Icon {
    match phase {
        Phase::Sync => Icon::Sync,
        Phase::Deploy => Icon::Deploy,
    }
}

fn phase_title(phase: Phase) -> &'static str {
    match phase {
        Phase::Sync => "Post-sync tasks",
        Phase::Deploy => "Post-deploy tasks",
    }
}

pub struct RunHeader<'a> {
    pub phase: Phase,
    pub host: &'a TargetHost,
    pub target: &'a str,
    pub task_count: usize,
    pub dry_run: bool,
}

pub fn render_run_header(
    run: &RunHeader<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(phase_icon(run.phase), phase_title(run.phase));
    header.add("Host", run.host.as_str());
    header.add("Target", run.target);
    header.add("Tasks", run.task_count.to_string());
    if run.dry_run {
        header.add("Mode", "dry run (nothing is changed)");
    }
    header.render(supports_color, supports_unicode)
}

/// Single progress line for a finished task
pub fn outcome_line(
    task: &str,
    outcome: &Outcome,
    duration_ms: Option<u64>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, detail) = match outcome {
        Outcome::Succeeded => (
            Icon::Success,
            duration_ms.map(|ms| ColoredText::dim(format!("({}ms)", ms)).render(supports_color)),
        ),
        Outcome::Skipped { reason } => (
            Icon::Skipped,
            Some(ColoredText::dim(format!("({})", reason)).render(supports_color)),
        ),
        Outcome::Failed { reason } => (
            Icon::Error,
            Some(ColoredText::error(reason.to_string()).render(supports_color)),
        ),
    };

    let icon = icon.colored(supports_color, supports_unicode);
    match detail {
        Some(detail) if outcome.is_failed() => format!("{} {}: {}", icon, task, detail),
        Some(detail) => format!("{} {} {}", icon, task, detail),
        None => format!("{} {}", icon, task),
    }
}

pub fn render_run_summary(
    report: &RunReport,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let phase = report.phase();
    let mut summary = if report.is_success() {
        ResultSummary::success(format!("{} finished", phase_title(phase)))
    } else {
        ResultSummary::failure(format!("{} finished with failures", phase_title(phase)))
    };

    summary.add_stat("succeeded", report.succeeded());
    summary.add_stat("skipped", report.skipped());
    summary.add_stat("failed", report.failed());

    for result in report.failures() {
        if let Outcome::Failed { reason } = result.outcome() {
            summary.add_failure(format!("{}: {}", result.task(), reason));
        }
    }

    if report.is_empty() {
        summary.add_warning(format!("No tasks are registered for '{}'", phase));
    }
    if dry_run {
        summary.add_warning("Dry run: no command reached the target");
    }
    if !report.is_success() {
        summary.with_next_step("re-run with -v to see command output");
    }

    summary.render(supports_color, supports_unicode)
}
