//! Command executors
//!
//! - `WpCliExecutor`: runs WP-CLI locally or over ssh
//! - `DryRunExecutor`: resolves and logs commands only

mod catalog;
mod dry_run;
mod wp_cli;

pub use catalog::{render_args, CommandCatalog};
pub use dry_run::DryRunExecutor;
pub use wp_cli::{Transport, WpCliExecutor};
