//! Gaussian fit workflow models

use std::path::{Path, PathBuf};

use mmr_application::registry::{METADATA_PLUGINS, MetadataPluginEntry, PluginClass};
use mmr_domain::{InputQuery, MetadataModel, MetadataPlugin, QueryParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::FILECATALOG_ROOT;
use crate::utils::store_first_match;

fn gaussian_dir() -> PathBuf {
    Path::new(FILECATALOG_ROOT).join("gaussian_fit")
}

/// Generation of the data sets to fit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataGenerationMetadata {
    /// File stored as `data1`
    pub output_file_name_1: Option<String>,
    /// File stored as `data2`
    pub output_file_name_2: Option<String>,
}

impl MetadataModel for DataGenerationMetadata {
    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        let base = gaussian_dir();
        Some(match output_name {
            "data1" if self.output_file_name_1.is_some() => base.join("data-generation-1"),
            "data2" if self.output_file_name_2.is_some() => base.join("data-generation-2"),
            _ => base.join("data-generation"),
        })
    }

    fn post_process(&self, job_path: &Path) -> bool {
        let mut stored = false;

        if let Some(name) = &self.output_file_name_1 {
            stored |= store_first_match(self, job_path, name, "data1");
        }
        if let Some(name) = &self.output_file_name_2 {
            stored |= store_first_match(self, job_path, name, "data2");
        }
        if self.output_file_name_1.is_none() && self.output_file_name_2.is_none() {
            stored = store_first_match(self, job_path, "*", "data1");
        }
        stored
    }
}

impl MetadataPlugin for DataGenerationMetadata {
    const DESCRIPTION: &'static str = "Data generation for Gaussian fitting workflows";
}

/// Gaussian fit over the generated data sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GaussianFitMetadata {
    pub data1: Option<Vec<Value>>,
    pub data2: Option<Vec<Value>>,
}

impl GaussianFitMetadata {
    fn has_inputs(&self) -> bool {
        [&self.data1, &self.data2]
            .into_iter()
            .any(|data| data.as_ref().is_some_and(|d| !d.is_empty()))
    }
}

impl MetadataModel for GaussianFitMetadata {
    fn get_input_query(&self, input_name: &str, _params: &QueryParams) -> Option<InputQuery> {
        let dir = match input_name {
            "data1" => "data-generation-1",
            "data2" => "data-generation-2",
            _ => return None,
        };
        Some(InputQuery::Single(gaussian_dir().join(dir)))
    }

    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        (output_name == "fit-data" && self.has_inputs()).then(|| gaussian_dir().join("fit"))
    }

    fn post_process(&self, job_path: &Path) -> bool {
        store_first_match(self, job_path, "fit*", "fit-data")
    }
}

impl MetadataPlugin for GaussianFitMetadata {
    const DESCRIPTION: &'static str = "Gaussian fitting analysis on data sets";
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(METADATA_PLUGINS)]
static DATA_GENERATION_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<DataGenerationMetadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static GAUSSIAN_FIT_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<GaussianFitMetadata>,
};
