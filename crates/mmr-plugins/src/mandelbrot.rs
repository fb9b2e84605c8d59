//! Mandelbrot image workflow models
//!
//! Generation jobs write raw tiles keyed by image geometry; the merging job
//! combines them into a composite image.

use std::path::{Path, PathBuf};

use mmr_application::registry::{METADATA_PLUGINS, MetadataPluginEntry, PluginClass};
use mmr_domain::{InputQuery, MetadataModel, MetadataPlugin, QueryParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::FILECATALOG_ROOT;
use crate::utils::store_first_match;

fn images_dir(kind: &str, width: u64, height: u64) -> PathBuf {
    Path::new(FILECATALOG_ROOT)
        .join("mandelbrot")
        .join("images")
        .join(kind)
        .join(format!("{width}x{height}"))
}

/// Tile generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MandelBrotGenerationMetadata {
    pub precision: f64,
    pub max_iterations: u64,
    pub start_x: f64,
    pub start_y: f64,
    pub step: u64,
    pub split: u64,
    pub width: u64,
    pub height: u64,
    pub output_name: String,
}

impl MetadataModel for MandelBrotGenerationMetadata {
    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        (output_name == "data").then(|| images_dir("raw", self.width, self.height))
    }

    fn post_process(&self, job_path: &Path) -> bool {
        store_first_match(self, job_path, "data*.txt", "data")
    }
}

impl MetadataPlugin for MandelBrotGenerationMetadata {
    const DESCRIPTION: &'static str = "Mandelbrot set generation with configurable parameters";
}

/// Merging of generated tiles into one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MandelBrotMergingMetadata {
    pub precision: f64,
    pub max_iterations: u64,
    pub start_x: f64,
    pub start_y: f64,
    pub step: u64,
    pub split: u64,
    pub width: u64,
    pub height: u64,
    pub output_name: String,
    /// Tiles to merge
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl MetadataModel for MandelBrotMergingMetadata {
    fn get_input_query(&self, _input_name: &str, _params: &QueryParams) -> Option<InputQuery> {
        Some(InputQuery::Single(images_dir("raw", self.width, self.height)))
    }

    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        if output_name != "data-merged" {
            return None;
        }
        let tiles = self.data.as_ref().filter(|data| !data.is_empty())?.len();
        let tiles = u64::try_from(tiles).ok()?;
        // Geometry too large for the catalog key has no output location
        let width = self.width.checked_mul(tiles)?;
        let height = self.height.checked_mul(tiles)?;
        Some(images_dir("merged", width, height))
    }

    fn post_process(&self, job_path: &Path) -> bool {
        store_first_match(self, job_path, "mandelbrot_image*bmp", "data-merged")
    }
}

impl MetadataPlugin for MandelBrotMergingMetadata {
    const DESCRIPTION: &'static str = "Mandelbrot image merging and composite generation";
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(METADATA_PLUGINS)]
static MANDELBROT_GENERATION_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<MandelBrotGenerationMetadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static MANDELBROT_MERGING_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<MandelBrotMergingMetadata>,
};
