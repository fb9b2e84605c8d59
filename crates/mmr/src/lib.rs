//! # Metadata Model Registry
//!
//! Pluggable metadata models for job execution. Each model describes how a
//! class of jobs resolves its inputs and outputs and what happens before and
//! after execution. Models are registered per virtual organization, found by
//! link-time discovery, and instantiated from descriptors with validated
//! fields.
//!
//! ## Example
//!
//! ```ignore
//! use mmr::application::get_registry;
//! use mmr::domain::MetadataDescriptor;
//!
//! let descriptor: MetadataDescriptor =
//!     serde_json::from_str(r#"{"metadata_class": "PiSimulate", "num_points": 1000}"#)?;
//! let model = get_registry().instantiate_plugin(&descriptor)?;
//! let output = model.get_output_query("sim", &Default::default());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - base model contract, descriptors and errors
//! - `application` - plugin registry, discovery and the shared instance
//! - `infrastructure` - configuration and logging
//! - `plugins` - first-party example models
//! - [`cli`] - the `mmr` command line

/// Domain layer - base model contract, descriptors and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mmr_domain::*;
}

/// Application layer - plugin registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use mmr_application::*;
}

/// Infrastructure layer - configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mmr_infrastructure::*;
}

/// First-party example plugins
pub mod plugins {
    pub use mmr_plugins::*;
}

pub mod cli;

pub use cli::{Cli, Commands};
