//! Process exit codes

use crate::domain::entities::RunReport;
use crate::error::TasksError;

/// Run finished and no task failed
pub const SUCCESS: i32 = 0;
/// At least one task failed
pub const TASK_FAILED: i32 = 1;
/// Unknown phase
pub const INVALID_PHASE: i32 = 2;
/// Invalid config, duplicate task or missing default answer
pub const CONFIGURATION: i32 = 3;
/// Anything else (I/O, internal errors)
pub const OTHER: i32 = 4;

pub fn for_report(report: &RunReport) -> i32 {
    if report.is_success() {
        SUCCESS
    } else {
        TASK_FAILED
    }
}

pub fn for_error(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<TasksError>() {
        Some(TasksError::InvalidPhase { .. }) => INVALID_PHASE,
        Some(e) if e.is_configuration() => CONFIGURATION,
        _ => OTHER,
    }
}
