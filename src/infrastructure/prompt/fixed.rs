//! Non-interactive prompter

use crate::domain::ports::Prompter;
use crate::error::{TasksError, TasksResult};

/// Answers every question with the supplied default, without asking anyone.
///
/// Use this for `--yes` and other automation. A question without a default
/// is a configuration error; guessing is not allowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPrompter;

impl Prompter for FixedPrompter {
    fn confirm(&self, question: &str, default: Option<bool>) -> TasksResult<bool> {
        match default {
            Some(answer) => {
                log::debug!("auto-answered '{}' with {}", question, answer);
                Ok(answer)
            }
            None => Err(TasksError::configuration(format!(
                "no default answer for '{}' in non-interactive mode",
                question
            ))),
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_default_when_present() {
        assert!(FixedPrompter.confirm("Clear?", Some(true)).unwrap());
        assert!(!FixedPrompter.confirm("Clear?", Some(false)).unwrap());
    }

    #[test]
    fn missing_default_is_configuration_error() {
        let err = FixedPrompter.confirm("Clear?", None).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Clear?"));
    }

    #[test]
    fn is_not_interactive() {
        assert!(!FixedPrompter.is_interactive());
    }
}
