//! Property tests for run accounting.

use std::sync::Arc;

use proptest::prelude::*;

use deploy_tasks::application::{RunOptions, TaskRunner};
use deploy_tasks::domain::entities::{ExecutionContext, Task};
use deploy_tasks::domain::services::TaskRegistry;
use deploy_tasks::domain::value_objects::{Outcome, Phase, SkipReason, TargetHost};
use deploy_tasks::infrastructure::{CommandCatalog, DryRunExecutor, FixedPrompter};

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Succeed,
    Fail,
    Panic,
}

#[derive(Debug, Clone)]
struct TaskShape {
    in_phase: bool,
    gated: bool,
    behavior: Behavior,
}

fn task_shape() -> impl Strategy<Value = TaskShape> {
    (
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(Behavior::Succeed), Just(Behavior::Fail), Just(Behavior::Panic)],
    )
        .prop_map(|(in_phase, gated, behavior)| TaskShape {
            in_phase,
            gated,
            behavior,
        })
}

fn task(i: usize, shape: &TaskShape) -> Task {
    let behavior = shape.behavior;
    let mut task = Task::new(
        format!("task-{i}"),
        move |_: &ExecutionContext| -> anyhow::Result<()> {
            match behavior {
                Behavior::Succeed => Ok(()),
                Behavior::Fail => anyhow::bail!("task-{i} failed"),
                Behavior::Panic => panic!("task-{i} panicked"),
            }
        },
    );
    task = task.on(if shape.in_phase { Phase::Deploy } else { Phase::Sync });
    if shape.gated {
        task = task.confirm("Run on {host}?");
    }
    task
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one result per eligible task, in order, and the counters
    /// add up; no failure or panic shortens the report.
    #[test]
    fn property_report_accounts_for_every_task(
        shapes in proptest::collection::vec(task_shape(), 0..10),
        answer in any::<bool>(),
    ) {
        let registry = TaskRegistry::from_tasks(
            shapes.iter().enumerate().map(|(i, s)| task(i, s)),
        ).expect("unique names");
        let runner = TaskRunner::new(
            registry,
            Arc::new(DryRunExecutor::new(CommandCatalog::builtin())),
            Arc::new(FixedPrompter),
            RunOptions::new(TargetHost::new("example.com")).with_default_answer(Some(answer)),
        );

        let report = runner.run_phase(Phase::Deploy).expect("default answer given");

        let eligible: Vec<(usize, &TaskShape)> =
            shapes.iter().enumerate().filter(|(_, s)| s.in_phase).collect();
        prop_assert_eq!(report.len(), eligible.len());
        prop_assert_eq!(
            report.succeeded() + report.skipped() + report.failed(),
            eligible.len()
        );

        for (result, (i, shape)) in report.results().iter().zip(&eligible) {
            prop_assert_eq!(result.task(), format!("task-{i}"));
            let expected_declined = shape.gated && !answer;
            if expected_declined {
                prop_assert_eq!(result.outcome(), &Outcome::skipped(SkipReason::Declined));
            } else {
                match shape.behavior {
                    Behavior::Succeed => prop_assert!(result.outcome().is_succeeded()),
                    Behavior::Fail | Behavior::Panic => prop_assert!(result.outcome().is_failed()),
                }
            }
        }
        prop_assert_eq!(report.is_success(), report.failed() == 0);
    }
}
