//! Task registry
//!
//! Registration order is the only ordering there is: no priorities, no
//! dependency graph. Tasks that must follow one another are registered in
//! that order.

use std::sync::Arc;

use crate::domain::entities::Task;
use crate::domain::value_objects::Phase;
use crate::error::{TasksError, TasksResult};

#[derive(Debug, Default, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Arc<Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from tasks in order, failing on the first duplicate name
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> TasksResult<Self> {
        let mut registry = Self::new();
        for task in tasks {
            registry.register(task)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, task: Task) -> TasksResult<()> {
        if self.contains(task.name()) {
            return Err(TasksError::DuplicateTask {
                name: task.name().to_string(),
            });
        }
        log::trace!("registered task '{}' for {:?}", task.name(), task.phases());
        self.tasks.push(Arc::new(task));
        Ok(())
    }

    /// Tasks bound to `phase`, in registration order
    pub fn tasks_for(&self, phase: Phase) -> Vec<Arc<Task>> {
        self.tasks
            .iter()
            .filter(|t| t.runs_in(phase))
            .cloned()
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|t| t.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
