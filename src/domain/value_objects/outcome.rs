//! Outcome of a single task within a run

use serde::Serialize;
use std::time::Duration;

/// Why a task did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Operator (or the non-interactive default) answered "no"
    Declined,
    /// The run was cancelled before the task started
    Cancelled,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Declined => write!(f, "declined"),
            SkipReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Why a task failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The action returned an error
    Error { message: String },
    /// The action did not finish within the configured limit
    Timeout {
        #[serde(rename = "limit_ms", serialize_with = "serialize_millis")]
        limit: Duration,
    },
    /// The action panicked
    Panicked { message: String },
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Error { message } => write!(f, "{}", message),
            FailureReason::Timeout { limit } => {
                write!(f, "timed out after {}s", limit.as_secs_f64())
            }
            FailureReason::Panicked { message } => write!(f, "task panicked: {}", message),
        }
    }
}

/// Final state of a task in a run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Skipped { reason: SkipReason },
    Succeeded,
    Failed { reason: FailureReason },
}

impl Outcome {
    pub fn skipped(reason: SkipReason) -> Self {
        Outcome::Skipped { reason }
    }

    pub fn failed(reason: FailureReason) -> Self {
        Outcome::Failed { reason }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Skipped { .. } => "skipped",
            Outcome::Succeeded => "succeeded",
            Outcome::Failed { .. } => "failed",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Skipped { reason } => write!(f, "skipped ({})", reason),
            Outcome::Succeeded => write!(f, "succeeded"),
            Outcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_predicates() {
        assert!(Outcome::Succeeded.is_succeeded());
        assert!(Outcome::skipped(SkipReason::Declined).is_skipped());
        assert!(Outcome::failed(FailureReason::Error {
            message: "boom".to_string()
        })
        .is_failed());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(
            Outcome::skipped(SkipReason::Cancelled).to_string(),
            "skipped (cancelled)"
        );
        assert_eq!(
            Outcome::failed(FailureReason::Timeout {
                limit: Duration::from_millis(1500)
            })
            .to_string(),
            "failed: timed out after 1.5s"
        );
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(Outcome::failed(FailureReason::Timeout {
            limit: Duration::from_secs(2),
        }))
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"]["kind"], "timeout");
        assert_eq!(json["reason"]["limit_ms"], 2000);

        let json = serde_json::to_value(Outcome::skipped(SkipReason::Declined)).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "declined");
    }
}
