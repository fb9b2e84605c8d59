//! Configuration types

pub mod app;
pub mod logging;
pub mod registry;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
