//! # Metadata Model Registry - Infrastructure Layer
//!
//! Cross-cutting technical concerns for the registry binary:
//!
//! - [`config`]: layered Figment configuration (defaults, TOML, `MMR__` env)
//! - [`logging`]: tracing subscriber setup
//! - [`error_ext`]: context extensions mapping foreign errors to domain errors

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
