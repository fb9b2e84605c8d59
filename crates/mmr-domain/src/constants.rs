//! Domain constants

/// Label of the scope holding plugins without an organization tag
pub const GLOBAL_SCOPE: &str = "GLOBAL";

/// Description used when a plugin does not declare one
pub const DEFAULT_DESCRIPTION: &str = "Base metadata model";

/// Model version used when a plugin does not declare one
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Suffix stripped from type identifiers when deriving plugin names
pub const METADATA_TYPE_SUFFIX: &str = "Metadata";

/// Descriptor keys that select a plugin and are never passed as parameters
pub const DESCRIPTOR_RESERVED_KEYS: [&str; 3] = ["metadata_class", "vo", "version"];
