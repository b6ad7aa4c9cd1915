//! Domain Layer
//!
//! The task model without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tasks and run reports
//! - `value_objects/` - Immutable value types (Phase, Outcome, TargetHost)
//! - `services/` - Task registry
//! - `ports/` - Interface definitions for infrastructure (executor, prompter, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or reads stdin directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
