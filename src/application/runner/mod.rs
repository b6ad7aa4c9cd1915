//! Runner Module
//!
//! Executes the tasks registered for a phase, one at a time, in
//! registration order.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`RunOptions`)
//! - `cancel` - Cooperative cancellation (`CancelToken`)
//! - `use_case` - The runner itself (`TaskRunner`)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_tasks::application::runner::{RunOptions, TaskRunner};
//!
//! let runner = TaskRunner::new(registry, executor, prompter, RunOptions::new(host));
//! let report = runner.run("deploy")?;
//! ```

mod cancel;
mod options;
mod use_case;

pub use cancel::CancelToken;
pub use options::RunOptions;
pub use use_case::TaskRunner;
