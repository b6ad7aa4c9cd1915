//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod host;
mod outcome;
mod phase;

pub use host::TargetHost;
pub use outcome::{FailureReason, Outcome, SkipReason};
pub use phase::Phase;
