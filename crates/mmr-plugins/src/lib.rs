//! # Metadata Model Registry - First-Party Plugins
//!
//! Example metadata models shipped with the registry. Each module submits its
//! plugins into the registry's link-time slice, so linking this crate is
//! enough for discovery to find them under the `mmr_plugins` source.
//!
//! | Module | Plugins |
//! |--------|---------|
//! | [`common`] | `User`, `Admin`, `QueryBased`, `TaskWithMetadataQueryPlugin` |
//! | [`pi`] | `PiSimulate`, `PiSimulateV2`, `PiGather` |
//! | [`gaussian`] | `DataGeneration`, `GaussianFit` |
//! | [`mandelbrot`] | `MandelBrotGeneration`, `MandelBrotMerging` |
//!
//! ## Usage
//!
//! ```ignore
//! // Force linkme registration of all plugins
//! extern crate mmr_plugins;
//!
//! let registry = mmr_application::get_registry();
//! assert!(registry.get_plugin("PiSimulate", None).is_some());
//! ```

/// Plugin-specific constants
pub mod constants;

/// Shared helpers for post-processing hooks
pub mod utils;

/// General-purpose models
pub mod common;

/// Pi estimation workflow
pub mod pi;

/// Gaussian fit workflow
pub mod gaussian;

/// Mandelbrot image workflow
pub mod mandelbrot;

pub use common::{AdminMetadata, QueryBasedMetadata, TaskWithMetadataQueryPlugin, UserMetadata};
pub use gaussian::{DataGenerationMetadata, GaussianFitMetadata};
pub use mandelbrot::{MandelBrotGenerationMetadata, MandelBrotMergingMetadata};
pub use pi::{PiGatherMetadata, PiSimulateMetadata, PiSimulateV2Metadata};
