pub mod config;
pub mod core;

// Re-export commonly used items for convenience
pub use config::AdapterConfig;
pub use crate::core::*;
