//! Compiled exclusion predicates.
//!
//! Two kinds of rule, applied at different points of the walk:
//! directory-name exclusions prune a whole subtree before descent, and
//! file exclusions (glob patterns plus the always-on hidden-file rule)
//! drop individual files just before they are queued.

use crate::error::PackError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;

/// Exclusion rules compiled from a [`crate::PackageSpec`].
#[derive(Debug, Clone)]
pub struct ExcludeRules {
    dirs: BTreeSet<String>,
    hidden_dirs: bool,
    files: GlobSet,
}

impl ExcludeRules {
    /// Compile directory names and file-name glob patterns. With
    /// `hidden_dirs`, every dot-directory is pruned as well.
    pub fn compile(
        dirs: &BTreeSet<String>,
        hidden_dirs: bool,
        file_patterns: &[String],
    ) -> Result<Self, PackError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in file_patterns {
            let glob = Glob::new(pattern).map_err(|e| PackError::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let files = builder.build().map_err(|e| PackError::Pattern {
            pattern: file_patterns.join(", "),
            source: e,
        })?;

        Ok(Self {
            dirs: dirs.clone(),
            hidden_dirs,
            files,
        })
    }

    /// True when a directory with this name must be pruned (not descended).
    pub fn skip_dir(&self, name: &str) -> bool {
        (self.hidden_dirs && name.starts_with('.')) || self.dirs.contains(name)
    }

    /// True when a file with this name must not be queued.
    ///
    /// Hidden files (leading dot) are always dropped during walks, on top
    /// of the configured patterns.
    pub fn skip_file(&self, name: &str) -> bool {
        name.starts_with('.') || self.files.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(dirs: &[&str], patterns: &[&str]) -> ExcludeRules {
        let dirs = dirs.iter().map(|s| s.to_string()).collect();
        let patterns: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        ExcludeRules::compile(&dirs, false, &patterns).unwrap()
    }

    #[test]
    fn prunes_exact_directory_names() {
        let r = rules(&["__pycache__", ".git"], &[]);
        assert!(r.skip_dir("__pycache__"));
        assert!(r.skip_dir(".git"));
        assert!(!r.skip_dir("src"));
        // Exact segment match, not substring.
        assert!(!r.skip_dir("__pycache__2"));
    }

    #[test]
    fn suffix_patterns_match_file_names() {
        let r = rules(&[], &["*.pyc", "*.zip"]);
        assert!(r.skip_file("module.pyc"));
        assert!(r.skip_file("EraseMeta_Chrome_v1.2.zip"));
        assert!(!r.skip_file("module.py"));
    }

    #[test]
    fn exact_name_patterns() {
        let r = rules(&[], &[".gitignore"]);
        assert!(r.skip_file(".gitignore"));
        assert!(!r.skip_file("gitignore"));
    }

    #[test]
    fn hidden_files_always_skipped() {
        let r = rules(&[], &[]);
        assert!(r.skip_file(".DS_Store"));
        assert!(!r.skip_file("icon.png"));
    }

    #[test]
    fn hidden_dir_rule_is_opt_in() {
        let plain = rules(&[".git"], &[]);
        assert!(!plain.skip_dir(".vscode"));

        let source = ExcludeRules::compile(&BTreeSet::new(), true, &[]).unwrap();
        assert!(source.skip_dir(".vscode"));
        assert!(source.skip_dir(".git"));
        assert!(!source.skip_dir("src"));
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let err = ExcludeRules::compile(&BTreeSet::new(), false, &["[".to_string()]).unwrap_err();
        assert!(matches!(err, PackError::Pattern { .. }));
    }
}
