//! Pi estimation workflow models
//!
//! Simulation jobs produce `*.sim` files under a catalog directory keyed by
//! the number of points; the gather job reads them back and stores the
//! aggregated estimate.

use std::path::{Path, PathBuf};

use mmr_application::registry::{METADATA_PLUGINS, MetadataPluginEntry, PluginClass};
use mmr_domain::{InputQuery, MetadataModel, MetadataPlugin, QueryParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::FILECATALOG_ROOT;
use crate::utils::{store_first_match, store_path};

const SIM_OUTPUT: &str = "sim";
const SIM_PATTERN: &str = "*.sim";

fn points_dir(num_points: u64) -> PathBuf {
    Path::new(FILECATALOG_ROOT)
        .join("pi")
        .join(num_points.to_string())
}

/// Pi simulation producing a `sim` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PiSimulateMetadata {
    /// Number of points to simulate
    pub num_points: u64,
}

impl MetadataModel for PiSimulateMetadata {
    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        (output_name == SIM_OUTPUT).then(|| points_dir(self.num_points))
    }

    fn post_process(&self, job_path: &Path) -> bool {
        store_first_match(self, job_path, SIM_PATTERN, SIM_OUTPUT)
    }
}

impl MetadataPlugin for PiSimulateMetadata {
    const DESCRIPTION: &'static str = "PI simulation metadata with point-based output management";
}

/// Pi simulation writing to an explicit file inside the job directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PiSimulateV2Metadata {
    pub num_points: u64,
    /// Simulation output, relative to the job directory
    pub output_path: String,
}

impl MetadataModel for PiSimulateV2Metadata {
    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        (output_name == SIM_OUTPUT).then(|| points_dir(self.num_points))
    }

    fn post_process(&self, job_path: &Path) -> bool {
        let output = job_path.join(&self.output_path);
        if !output.exists() {
            debug!(output = %output.display(), "Simulation output missing");
            return false;
        }
        store_path(self, &output, SIM_OUTPUT)
    }
}

impl MetadataPlugin for PiSimulateV2Metadata {
    const DESCRIPTION: &'static str = "Enhanced PI simulation metadata with custom output paths";
}

/// Aggregation of several pi simulations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PiGatherMetadata {
    /// Points per simulation job
    pub num_points: u64,
    /// Simulation results to aggregate
    #[serde(default)]
    pub input_data: Option<Vec<Value>>,
}

impl MetadataModel for PiGatherMetadata {
    fn get_input_query(&self, input_name: &str, _params: &QueryParams) -> Option<InputQuery> {
        (input_name == "input-data").then(|| InputQuery::Single(points_dir(self.num_points)))
    }

    fn get_output_query(&self, output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        if output_name != "pi_result" {
            return None;
        }
        let inputs = self.input_data.as_ref().filter(|data| !data.is_empty())?;
        let total = u64::try_from(inputs.len())
            .ok()
            .and_then(|jobs| self.num_points.checked_mul(jobs))?;
        Some(points_dir(total))
    }

    fn post_process(&self, job_path: &Path) -> bool {
        store_first_match(self, job_path, SIM_PATTERN, "pi_result")
    }
}

impl MetadataPlugin for PiGatherMetadata {
    const DESCRIPTION: &'static str = "PI result gathering and aggregation metadata";
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(METADATA_PLUGINS)]
static PI_SIMULATE_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<PiSimulateMetadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static PI_SIMULATE_V2_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<PiSimulateV2Metadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static PI_GATHER_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<PiGatherMetadata>,
};
