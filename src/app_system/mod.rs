//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod tracing;
pub mod warehouse_system;

pub use config::*;
pub use self::tracing::*;
pub use warehouse_system::*;
