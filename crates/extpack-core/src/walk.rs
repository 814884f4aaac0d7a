//! Pruned recursive directory traversal.
//!
//! Excluded subdirectory names are removed from the pending set before
//! descent, so the walk never enters version-control metadata or cache
//! trees at all. Entries are visited in name order per directory, which
//! keeps archive write order deterministic for unchanged inputs.

use crate::error::PackError;
use crate::exclude::ExcludeRules;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One file that survived the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Absolute (or root-joined) location on disk.
    pub source: PathBuf,
    /// Location inside the archive, relative to the project root.
    pub relative: PathBuf,
}

/// Walk `dir` recursively, yielding files that pass `rules`, with archive
/// paths computed relative to `root`.
pub fn walk_dir(
    dir: &Path,
    root: &Path,
    rules: &ExcludeRules,
) -> Result<Vec<WalkedFile>, PackError> {
    let mut out = Vec::new();
    walk_into(dir, root, rules, &mut out)?;
    Ok(out)
}

fn walk_into(
    dir: &Path,
    root: &Path,
    rules: &ExcludeRules,
    out: &mut Vec<WalkedFile>,
) -> Result<(), PackError> {
    let mut subdirs: Vec<PathBuf> = Vec::new();
    let mut files: Vec<PathBuf> = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| PackError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| PackError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| PackError::io(&path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            if rules.skip_dir(&name) {
                debug!(dir = %path.display(), "pruning excluded directory");
                continue;
            }
            subdirs.push(path);
        } else if file_type.is_file() {
            if rules.skip_file(&name) {
                debug!(file = %path.display(), "skipping excluded file");
                continue;
            }
            files.push(path);
        }
        // Symlinks and other special entries are not packaged.
    }

    subdirs.sort();
    files.sort();

    for file in files {
        let relative = relative_to(&file, root)?;
        out.push(WalkedFile {
            source: file,
            relative,
        });
    }
    for subdir in subdirs {
        walk_into(&subdir, root, rules, out)?;
    }
    Ok(())
}

/// Express `path` relative to `root`, or fail with [`PackError::InvalidRoot`].
pub fn relative_to(path: &Path, root: &Path) -> Result<PathBuf, PackError> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| PackError::InvalidRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    fn rules(dirs: &[&str], patterns: &[&str]) -> ExcludeRules {
        let dirs: BTreeSet<String> = dirs.iter().map(|s| s.to_string()).collect();
        let patterns: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        ExcludeRules::compile(&dirs, false, &patterns).unwrap()
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn yields_relative_paths_in_sorted_order() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("src/b.js"));
        touch(&root.join("src/a.js"));
        touch(&root.join("src/utils/base64.js"));

        let got = walk_dir(&root.join("src"), root, &rules(&[], &[])).unwrap();
        let rel: Vec<_> = got.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("src/a.js"),
                PathBuf::from("src/b.js"),
                PathBuf::from("src/utils/base64.js"),
            ]
        );
    }

    #[test]
    fn prunes_excluded_directories_at_any_depth() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("libs/keep.js"));
        touch(&root.join("libs/__pycache__/skip.pyc"));
        touch(&root.join("libs/nested/__pycache__/deep.pyc"));
        touch(&root.join("libs/nested/ok.js"));

        let got = walk_dir(&root.join("libs"), root, &rules(&["__pycache__"], &[])).unwrap();
        let rel: Vec<_> = got.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("libs/keep.js"), PathBuf::from("libs/nested/ok.js")]
        );
    }

    #[test]
    fn drops_files_matching_patterns_and_hidden_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("src/app.js"));
        touch(&root.join("src/app.pyc"));
        touch(&root.join("src/.DS_Store"));

        let got = walk_dir(&root.join("src"), root, &rules(&[], &["*.pyc"])).unwrap();
        let rel: Vec<_> = got.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(rel, vec![PathBuf::from("src/app.js")]);
    }

    #[test]
    fn relative_to_rejects_paths_outside_root() {
        let err = relative_to(Path::new("/elsewhere/f"), Path::new("/proj")).unwrap_err();
        assert!(matches!(err, PackError::InvalidRoot { .. }));
    }
}
