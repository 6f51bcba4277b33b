//! Engine and registry configuration, read from `FODINHA_*` environment variables.

pub mod engine;
pub mod registry;

pub use engine::{CarryPolicy, EngineConfig};
pub use registry::RegistryConfig;
