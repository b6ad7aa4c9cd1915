use deploy_tasks::domain::entities::RunReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// GitHub Actions workflow command, e.g. `::error title=x::message`
pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = match title {
        Some(title) => format!(" title={}", escape_property(title)),
        None => String::new(),
    };

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

/// One `::error` line per failed task; declined tasks are not annotated
pub fn report_annotations(report: &RunReport) -> Vec<String> {
    report
        .failures()
        .map(|result| {
            github_actions_annotation(
                AnnotationLevel::Error,
                &result.outcome().to_string(),
                Some(&format!("{} task '{}'", report.phase(), result.task())),
            )
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploy_tasks::domain::entities::TaskResult;
    use deploy_tasks::domain::value_objects::{
        FailureReason, Outcome, Phase, SkipReason, TargetHost,
    };
    use std::time::Duration;

    #[test]
    fn annotation_escapes_newlines() {
        let rendered =
            github_actions_annotation(AnnotationLevel::Error, "Line1\nLine2", Some("Title"));
        assert!(rendered.contains("%0A"));
        assert!(rendered.starts_with("::error title=Title::"));
    }

    #[test]
    fn title_escapes_separators() {
        let rendered = github_actions_annotation(AnnotationLevel::Warning, "m", Some("a:b,c"));
        assert_eq!(rendered, "::warning title=a%3Ab%2Cc::m");
    }

    #[test]
    fn only_failures_are_annotated() {
        let mut report = RunReport::builder(Phase::Deploy, TargetHost::new("example.com"));
        report.push(TaskResult::new("activate-plugins", Outcome::Succeeded, Duration::ZERO));
        report.push(TaskResult::new(
            "clear-cache",
            Outcome::skipped(SkipReason::Declined),
            Duration::ZERO,
        ));
        report.push(TaskResult::new(
            "flush-rewrites",
            Outcome::failed(FailureReason::Error {
                message: "wp exited with status 1".to_string(),
            }),
            Duration::ZERO,
        ));

        let lines = report_annotations(&report.finish());
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "::error title=deploy task 'flush-rewrites'::failed: wp exited with status 1"
        );
    }
}
