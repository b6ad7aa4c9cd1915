//! Domain Services
//!
//! Pure business logic services that operate on domain entities.

mod registry;

pub use registry::TaskRegistry;
