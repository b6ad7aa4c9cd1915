//! Terminal prompter
//!
//! Uses dialoguer for line editing when stdin is a TTY.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use crate::domain::ports::prompter::{is_affirmative, Prompter};
use crate::error::TasksResult;

/// Interactive prompter for a real terminal.
///
/// The answer is free text so that a stray key never counts as consent;
/// only `y` confirms. Interrupts and terminal errors resolve to "no".
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompter {
    color: bool,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn ask(&self, theme: &dyn Theme, question: &str) -> bool {
        let answer = Input::<String>::with_theme(theme)
            .with_prompt(format!("{} [y/n]", question))
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                log::debug!("prompt aborted ({}), answering no", e);
                false
            }
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str, _default: Option<bool>) -> TasksResult<bool> {
        let answer = if self.color {
            self.ask(&ColorfulTheme::default(), question)
        } else {
            self.ask(&SimpleTheme, question)
        };
        Ok(answer)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_prompter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TerminalPrompter>();
    }

    #[test]
    fn terminal_prompter_is_interactive() {
        assert!(TerminalPrompter::default().is_interactive());
    }

    // Note: asking requires a real TTY; the answer normalization is covered by
    // `prompter::is_affirmative` and the line prompter tests.
}
