//! Common test utilities for deploy-tasks CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment (project dir, home dir, scrubbed env)
//! - `FakeWp`: A stand-in `wp` binary that records its invocations
//! - Assertion macros: `assert_exit!`, `assert_output_contains!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fake_wp;

pub use env::*;
pub use fake_wp::*;
