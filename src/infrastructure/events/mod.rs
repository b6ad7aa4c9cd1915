//! Event Sink Implementations
//!
//! Provides concrete implementations of RunEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console sink lives with the binary (`commands::console`).

mod json;

pub use json::JsonEventSink;
