//! Base model contract
//!
//! Every metadata model implements [`MetadataModel`], the hook surface a job
//! executor drives, and [`MetadataPlugin`], the declared identity plus the
//! field schema used for validated construction.
//!
//! Fields are the plugin struct's serde fields. Defaults come from
//! `#[serde(default)]` and the declared field set comes from
//! `schemars::JsonSchema`, so one derivation serves both validation and
//! schema publication.
//!
//! ## Example
//!
//! ```
//! use mmr_domain::{MetadataModel, MetadataPlugin};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
//! #[serde(default)]
//! struct CampaignMetadata {
//!     campaign: String,
//! }
//!
//! impl Default for CampaignMetadata {
//!     fn default() -> Self {
//!         Self { campaign: "2024".to_string() }
//!     }
//! }
//!
//! impl MetadataModel for CampaignMetadata {}
//!
//! impl MetadataPlugin for CampaignMetadata {
//!     const DESCRIPTION: &'static str = "Campaign-scoped outputs";
//! }
//!
//! assert_eq!(CampaignMetadata::metadata_class(), "Campaign");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use downcast_rs::{Downcast, impl_downcast};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_VERSION, METADATA_TYPE_SUFFIX};
use crate::error::{Error, Result};
use crate::value_objects::{InputQuery, QueryParams};

/// Hooks a metadata model may participate in
///
/// All hooks are optional; the defaults leave the job untouched and resolve
/// nothing. Construction of a model never performs I/O; hooks may, and the
/// job executor sequences them.
pub trait MetadataModel: Downcast + fmt::Debug + Send + Sync {
    /// Adjust the command before execution
    fn pre_process(&self, _job_path: &Path, command: Vec<String>) -> Vec<String> {
        command
    }

    /// Handle job outputs after execution; `true` on success
    fn post_process(&self, _job_path: &Path) -> bool {
        true
    }

    /// Resolve the location(s) of a job input
    ///
    /// `None` means this model does not resolve the given input.
    fn get_input_query(&self, _input_name: &str, _params: &QueryParams) -> Option<InputQuery> {
        None
    }

    /// Resolve where a job output should be stored
    fn get_output_query(&self, _output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        None
    }

    /// Move a produced file into the location resolved for `output_name`
    ///
    /// Returns the destination path.
    fn store_output(&self, output_name: &str, src_path: &Path) -> Result<PathBuf> {
        let output_dir = self
            .get_output_query(output_name, &QueryParams::new())
            .ok_or_else(|| Error::not_found(format!("output path for '{output_name}'")))?;

        std::fs::create_dir_all(&output_dir).map_err(|e| {
            Error::io_with_source(format!("Failed to create {}", output_dir.display()), e)
        })?;

        let file_name = src_path
            .file_name()
            .ok_or_else(|| Error::io(format!("{} has no file name", src_path.display())))?;
        let dest = output_dir.join(file_name);

        std::fs::rename(src_path, &dest).map_err(|e| {
            Error::io_with_source(
                format!("Failed to move {} to {}", src_path.display(), dest.display()),
                e,
            )
        })?;

        tracing::info!(output = output_name, dest = %dest.display(), "Output stored");
        Ok(dest)
    }
}

impl_downcast!(MetadataModel);

/// Declared identity and validated construction of a metadata model
pub trait MetadataPlugin: MetadataModel + DeserializeOwned + JsonSchema + Sized {
    /// Explicit plugin name; derived from the type identifier when unset
    const NAME: Option<&'static str> = None;

    /// Human-readable description
    const DESCRIPTION: &'static str = DEFAULT_DESCRIPTION;

    /// Owning virtual organization; `None` means globally visible
    const VO: Option<&'static str> = None;

    /// Model version
    const VERSION: &'static str = DEFAULT_VERSION;

    /// Registry name of this plugin
    fn metadata_class() -> String {
        Self::NAME.map_or_else(
            || derive_plugin_name(std::any::type_name::<Self>()),
            str::to_string,
        )
    }
}

/// Derive a plugin name from a fully qualified type name
///
/// Keeps the last path segment, drops generic arguments and strips a trailing
/// `Metadata` (`my_crate::pi::PiSimulateMetadata` becomes `PiSimulate`).
pub fn derive_plugin_name(type_name: &str) -> String {
    let base = type_name.split('<').next().unwrap_or(type_name);
    let ident = base.rsplit("::").next().unwrap_or(base);
    match ident.strip_suffix(METADATA_TYPE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => ident.to_string(),
    }
}
