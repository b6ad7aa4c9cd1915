//! Command implementations for the deploy-tasks binary

pub mod console;
pub mod list;
pub mod run;
