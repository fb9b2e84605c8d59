//! Core metadata models
//!
//! General-purpose models shipped with the registry. They serve as examples
//! and cover common cases: plain jobs, administrative jobs, and jobs whose
//! inputs are located from query parameters.

use std::path::{Path, PathBuf};

use mmr_application::registry::{METADATA_PLUGINS, MetadataPluginEntry, PluginClass};
use mmr_domain::{InputQuery, MetadataModel, MetadataPlugin, QueryParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::{ADMIN_DEFAULT_LOG_LEVEL, FILECATALOG_ROOT};

/// Default user model with no special processing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserMetadata {}

impl MetadataModel for UserMetadata {}

impl MetadataPlugin for UserMetadata {
    const DESCRIPTION: &'static str = "Basic user metadata with no special processing";
}

/// Administrative model with configurable logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AdminMetadata {
    /// Log level passed to the job; `INFO` leaves the command untouched
    pub log_level: String,
    /// Whether post-processing reports to monitoring
    pub enable_monitoring: bool,
    /// Administrative privilege level
    pub admin_level: u32,
}

impl Default for AdminMetadata {
    fn default() -> Self {
        Self {
            log_level: ADMIN_DEFAULT_LOG_LEVEL.to_string(),
            enable_monitoring: true,
            admin_level: 1,
        }
    }
}

impl MetadataModel for AdminMetadata {
    fn pre_process(&self, _job_path: &Path, mut command: Vec<String>) -> Vec<String> {
        if self.log_level != ADMIN_DEFAULT_LOG_LEVEL {
            command.extend(["--log-level".to_string(), self.log_level.clone()]);
        }
        command
    }

    fn post_process(&self, job_path: &Path) -> bool {
        if self.enable_monitoring {
            debug!(
                job = %job_path.display(),
                admin_level = self.admin_level,
                "Administrative job finished"
            );
        }
        true
    }
}

impl MetadataPlugin for AdminMetadata {
    const DESCRIPTION: &'static str = "Administrative metadata with enhanced logging";
}

/// Model resolving inputs from its own query fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QueryBasedMetadata {
    /// Catalog root; defaults to the local file catalog
    pub query_root: Option<String>,
    pub site: Option<String>,
    pub campaign: Option<String>,
    pub data_type: Option<String>,
}

impl MetadataModel for QueryBasedMetadata {
    fn get_input_query(&self, _input_name: &str, _params: &QueryParams) -> Option<InputQuery> {
        let base = PathBuf::from(self.query_root.as_deref().unwrap_or(FILECATALOG_ROOT));
        let parts: Vec<&str> = [&self.campaign, &self.site, &self.data_type]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();

        if parts.is_empty() {
            return None;
        }
        Some(InputQuery::Single(parts.into_iter().fold(base, |path, part| path.join(part))))
    }

    fn get_output_query(&self, _output_name: &str, _params: &QueryParams) -> Option<PathBuf> {
        let base = Path::new(FILECATALOG_ROOT).join("outputs");
        Some(match (&self.campaign, &self.site) {
            (Some(campaign), Some(site)) => base.join(campaign).join(site),
            (Some(campaign), None) => base.join(campaign),
            _ => base.join("default"),
        })
    }
}

impl MetadataPlugin for QueryBasedMetadata {
    const DESCRIPTION: &'static str = "Metadata with query-based input resolution";
}

/// Model resolving inputs from the query parameters of each call
///
/// In a real deployment the query would go to the metadata service and yield
/// logical file names; here it maps `site`/`campaign` onto catalog paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskWithMetadataQueryPlugin {}

impl MetadataModel for TaskWithMetadataQueryPlugin {
    fn get_input_query(&self, _input_name: &str, params: &QueryParams) -> Option<InputQuery> {
        let site = non_empty_str(params.get("site"));
        let campaign = non_empty_str(params.get("campaign"));
        let root = Path::new(FILECATALOG_ROOT);

        match (site, campaign) {
            (Some(site), Some(campaign)) => {
                Some(InputQuery::Many(vec![root.join(campaign).join(site)]))
            }
            (Some(site), None) => Some(InputQuery::Single(root.join(site))),
            _ => None,
        }
    }
}

impl MetadataPlugin for TaskWithMetadataQueryPlugin {
    const DESCRIPTION: &'static str = "Example metadata plugin with query-based input resolution";
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(METADATA_PLUGINS)]
static USER_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<UserMetadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static ADMIN_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<AdminMetadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static QUERY_BASED_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<QueryBasedMetadata>,
};

#[linkme::distributed_slice(METADATA_PLUGINS)]
static TASK_WITH_METADATA_QUERY_PLUGIN: MetadataPluginEntry = MetadataPluginEntry {
    source: module_path!(),
    class: PluginClass::of::<TaskWithMetadataQueryPlugin>,
};
