//! Prompter Port
//!
//! Asks the operator a yes/no question before a gated task runs.
//! Implementations can be interactive (terminal, piped stdin) or fixed
//! (non-interactive automation).

use crate::error::TasksResult;

/// Trait for confirming gated tasks.
pub trait Prompter: Send + Sync {
    /// Ask `question` and return the decision.
    ///
    /// Interactive implementations treat anything but an explicit "y" as "no".
    /// Non-interactive implementations return `default` and fail with
    /// `TasksError::Configuration` when there is none.
    fn confirm(&self, question: &str, default: Option<bool>) -> TasksResult<bool>;

    /// Whether an operator is actually asked
    fn is_interactive(&self) -> bool;
}

/// Normalize an operator's answer. Only `y` (any case, surrounding
/// whitespace ignored) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
