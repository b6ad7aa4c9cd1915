//! Prompter implementations
//!
//! - `TerminalPrompter`: dialoguer input when stdin is a terminal
//! - `LinePrompter`: plain line reading for pipes and tests
//! - `FixedPrompter`: non-interactive, answers with the configured default

mod fixed;
mod line;
mod terminal;

pub use fixed::FixedPrompter;
pub use line::LinePrompter;
pub use terminal::TerminalPrompter;
