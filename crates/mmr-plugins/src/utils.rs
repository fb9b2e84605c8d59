//! Shared helpers for post-processing hooks

use std::path::{Path, PathBuf};

use mmr_domain::MetadataModel;
use tracing::{debug, warn};

/// First file in `job_path` matching `pattern`, in sorted order
pub fn first_match(job_path: &Path, pattern: &str) -> Option<PathBuf> {
    let escaped = glob::Pattern::escape(&job_path.to_string_lossy());
    let full = format!("{escaped}/{pattern}");
    match glob::glob(&full) {
        Ok(paths) => paths.filter_map(Result::ok).next(),
        Err(e) => {
            warn!(pattern = %full, error = %e, "Invalid output pattern");
            None
        }
    }
}

/// Store the first file matching `pattern` as `output_name`
///
/// Returns `true` when a file was found and stored.
pub fn store_first_match<M>(model: &M, job_path: &Path, pattern: &str, output_name: &str) -> bool
where
    M: MetadataModel + ?Sized,
{
    let Some(src) = first_match(job_path, pattern) else {
        debug!(output = output_name, pattern, "No output produced");
        return false;
    };
    store_path(model, &src, output_name)
}

/// Store an already located file as `output_name`
pub fn store_path<M>(model: &M, src: &Path, output_name: &str) -> bool
where
    M: MetadataModel + ?Sized,
{
    match model.store_output(output_name, src) {
        Ok(_) => true,
        Err(e) => {
            warn!(output = output_name, error = %e, "Failed to store output");
            false
        }
    }
}
