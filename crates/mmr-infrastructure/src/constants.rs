//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mmr.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mmr";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "MMR";

/// Separator between the prefix and nested keys (`MMR__LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "MMR_LOG";

/// File name prefix used by the rolling file appender
pub const LOG_FILE_PREFIX: &str = "mmr";
