//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `executor/` - Command executors (WP-CLI, dry run) and the command catalog
//! - `prompt/` - Prompters (terminal, line stream, fixed answer)
//! - `events/` - Event sinks (JSON)

pub mod events;
pub mod executor;
pub mod prompt;

// Re-export for convenience
pub use events::JsonEventSink;
pub use executor::{CommandCatalog, DryRunExecutor, Transport, WpCliExecutor};
pub use prompt::{FixedPrompter, LinePrompter, TerminalPrompter};
