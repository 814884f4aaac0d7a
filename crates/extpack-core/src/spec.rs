//! Per-invocation packaging configuration.
//!
//! Everything the assembler needs arrives as one explicit value rather
//! than module-level constants, so a run is fully described by its spec
//! and testable with synthetic inputs.

use crate::error::PackError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One packaging run: what to include, what to drop, where to write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSpec {
    /// Project root. Archive paths are computed relative to it.
    pub root: PathBuf,

    /// Ordered top-level paths to package: plain files or directory roots.
    /// Order determines archive write order; readers must not depend on it.
    pub include_paths: Vec<PathBuf>,

    /// Directory names pruned wherever they appear in the tree.
    #[serde(default)]
    pub exclude_dirs: BTreeSet<String>,

    /// Also prune every dot-directory, as source distributions do.
    #[serde(default)]
    pub exclude_hidden_dirs: bool,

    /// File-name glob patterns dropped during directory walks,
    /// e.g. `*.pyc` or `.gitignore`.
    #[serde(default)]
    pub exclude_file_patterns: Vec<String>,

    /// Optional manifest variant to swap in under [`Self::manifest_dest_name`].
    #[serde(default)]
    pub manifest_source: Option<PathBuf>,

    /// Canonical archive name for the manifest swap.
    #[serde(default = "default_manifest_dest")]
    pub manifest_dest_name: String,

    /// Archive file to create or overwrite.
    pub output_path: PathBuf,
}

fn default_manifest_dest() -> String {
    "manifest.json".to_string()
}

impl PackageSpec {
    /// Load a spec from a YAML file.
    pub fn load(path: &Path) -> Result<Self, PackError> {
        let content = std::fs::read_to_string(path).map_err(|e| PackError::SpecParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| PackError::SpecParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve a declared path against the project root.
    ///
    /// Absolute paths pass through; relative paths are joined onto `root`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
