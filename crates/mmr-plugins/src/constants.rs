//! Plugin-specific constants

/// Root of the local file catalog that example plugins resolve into
pub const FILECATALOG_ROOT: &str = "filecatalog";

/// Log level under which `Admin` leaves the command untouched
pub const ADMIN_DEFAULT_LOG_LEVEL: &str = "INFO";
