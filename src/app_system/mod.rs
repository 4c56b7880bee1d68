//! System orchestration, startup, and shutdown logic.

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use self::tracing::setup_tracing;
