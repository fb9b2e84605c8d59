//! Application layer constants

/// Source locations scanned when the shared registry is created
///
/// `mmr_plugins` holds the first-party example plugins; `mmr_vo_plugins` is
/// the slot for an optional organization-specific plugin package.
pub const DEFAULT_PLUGIN_SOURCES: [&str; 2] = ["mmr_plugins", "mmr_vo_plugins"];
