//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the runner with infrastructure dependencies
//! - Mapping outcomes to process exit codes
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates the runner with proper dependencies (dependency injection)
//! - `exit_code` - Exit status conventions
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_tasks::presentation::factory;
//!
//! let runner = factory::create_task_runner(&config, &cli, prompter)?;
//! let report = runner.run(&cli.phase)?;
//! ```

pub mod cli;
pub mod exit_code;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::create_task_runner;
