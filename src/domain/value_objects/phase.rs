//! Phase value object - the lifecycle event that selects eligible tasks
//!
//! - `Sync`: runs after the database/files were pulled or pushed
//! - `Deploy`: runs after code was deployed to the target

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::TasksError;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Sync,
    Deploy,
}

impl Phase {
    /// Every valid phase, in declaration order
    pub const ALL: [Phase; 2] = [Phase::Sync, Phase::Deploy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Sync => "sync",
            Phase::Deploy => "deploy",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = TasksError;

    /// Exact, case-sensitive match. Anything else is a configuration error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sync" => Ok(Phase::Sync),
            "deploy" => Ok(Phase::Deploy),
            other => Err(TasksError::InvalidPhase {
                value: other.to_string(),
            }),
        }
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
