//! Configuration management
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `MMR__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
