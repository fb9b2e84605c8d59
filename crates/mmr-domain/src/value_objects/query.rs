//! Data resolution results returned by metadata model hooks

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Free-form keyword parameters passed to input/output query hooks
pub type QueryParams = Map<String, Value>;

/// Resolved location(s) of a job input
///
/// Paths are opaque identifiers for the data catalog; the registry never
/// touches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputQuery {
    /// A single location
    Single(PathBuf),
    /// Several locations, in resolution order
    Many(Vec<PathBuf>),
}

impl InputQuery {
    /// All resolved paths, in order
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Self::Single(path) => vec![path.as_path()],
            Self::Many(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// Consume the query and return its paths
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Self::Single(path) => vec![path],
            Self::Many(paths) => paths,
        }
    }
}

impl From<PathBuf> for InputQuery {
    fn from(path: PathBuf) -> Self {
        Self::Single(path)
    }
}

impl From<Vec<PathBuf>> for InputQuery {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Many(paths)
    }
}
