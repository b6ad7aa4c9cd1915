//! Terminal rendering for the deploy-tasks binary
//!
//! Everything here writes human-facing text. The NDJSON stream lives in
//! the library (`infrastructure::events`).

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
