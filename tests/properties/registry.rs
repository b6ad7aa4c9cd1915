//! Property tests for phase filtering in the task registry.

use proptest::prelude::*;

use deploy_tasks::domain::entities::{ExecutionContext, Task};
use deploy_tasks::domain::services::TaskRegistry;
use deploy_tasks::domain::value_objects::Phase;

/// Phase membership per task: (in sync, in deploy)
fn task_phases() -> impl Strategy<Value = Vec<(bool, bool)>> {
    proptest::collection::vec((any::<bool>(), any::<bool>()), 0..12)
}

fn build(phases: &[(bool, bool)]) -> TaskRegistry {
    let tasks = phases.iter().enumerate().map(|(i, (sync, deploy))| {
        let mut task = Task::new(format!("task-{i}"), |_: &ExecutionContext| -> anyhow::Result<()> {
            Ok(())
        });
        if *sync {
            task = task.on(Phase::Sync);
        }
        if *deploy {
            task = task.on(Phase::Deploy);
        }
        task
    });
    TaskRegistry::from_tasks(tasks).expect("names are unique")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `tasks_for` keeps registration order and selects exactly
    /// the tasks bound to the phase.
    #[test]
    fn property_filter_preserves_order(phases in task_phases()) {
        let registry = build(&phases);

        for phase in [Phase::Sync, Phase::Deploy] {
            let pick = |p: &(bool, bool)| match phase {
                Phase::Sync => p.0,
                Phase::Deploy => p.1,
            };
            let expected: Vec<String> = phases
                .iter()
                .enumerate()
                .filter(|(_, p)| pick(p))
                .map(|(i, _)| format!("task-{i}"))
                .collect();
            let actual: Vec<String> = registry
                .tasks_for(phase)
                .iter()
                .map(|t| t.name().to_string())
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// PROPERTY: every registered task is listed once, in order.
    #[test]
    fn property_names_match_registration(phases in task_phases()) {
        let registry = build(&phases);
        let names: Vec<String> = registry.names().iter().map(|n| n.to_string()).collect();
        let expected: Vec<String> = (0..phases.len()).map(|i| format!("task-{i}")).collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(registry.len(), phases.len());
    }
}

#[test]
fn registering_a_name_twice_fails() {
    let mut registry = build(&[(true, false)]);
    let again = Task::new("task-0", |_: &ExecutionContext| -> anyhow::Result<()> { Ok(()) });
    assert!(registry.register(again).is_err());
    assert_eq!(registry.len(), 1);
}
